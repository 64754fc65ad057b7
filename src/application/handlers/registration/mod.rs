//! Registration command and query handlers.

mod export_registrations;
mod list_registrations;
mod submit_registration;
mod update_registration_status;

pub use export_registrations::{
    ExportRegistrationsHandler, ExportRegistrationsQuery, ExportRegistrationsResult,
};
pub use list_registrations::ListRegistrationsHandler;
pub use submit_registration::{SubmitRegistrationCommand, SubmitRegistrationHandler};
pub use update_registration_status::{
    UpdateRegistrationStatusCommand, UpdateRegistrationStatusHandler,
};
