//! Registration module - applications to the mentorship and bootcamp programs.
//!
//! A registration is created pending by a public form submission and then
//! reviewed by the administrator, who moves it between statuses.

mod aggregate;
mod errors;
mod form;
mod profile;
mod status;

pub use aggregate::Registration;
pub use errors::RegistrationError;
pub use form::{
    NewRegistration, RegistrationForm, MAX_INTERESTS_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH,
    MAX_ROLE_LENGTH,
};
pub(crate) use form::collect;
pub use profile::{ExperienceLevel, ProgramType, SchedulePreference};
pub use status::{RegistrationStatus, TransitionPolicy};

#[cfg(test)]
pub(crate) use aggregate::test_support;
