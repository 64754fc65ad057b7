//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod admin;
pub mod outreach;
pub mod registration;

pub use admin::{AdminLoginCommand, AdminLoginHandler, GetDashboardStatsHandler};
pub use outreach::{
    SubmitContactMessageCommand, SubmitContactMessageHandler, SubscribeNewsletterCommand,
    SubscribeNewsletterHandler,
};
pub use registration::{
    ExportRegistrationsHandler, ExportRegistrationsQuery, ExportRegistrationsResult,
    ListRegistrationsHandler, SubmitRegistrationCommand, SubmitRegistrationHandler,
    UpdateRegistrationStatusCommand, UpdateRegistrationStatusHandler,
};
