//! SubmitRegistrationHandler - Command handler for public program registrations.

use std::sync::Arc;

use crate::domain::foundation::{RegistrationId, Timestamp};
use crate::domain::registration::{Registration, RegistrationError, RegistrationForm};
use crate::ports::RegistrationRepository;

/// Command carrying an untrusted registration form.
#[derive(Debug, Clone)]
pub struct SubmitRegistrationCommand {
    pub form: RegistrationForm,
}

/// Handler for new registrations.
///
/// Validates, builds a pending registration, and inserts it once. Duplicate
/// emails are detected by the store's insert, not by a prior lookup.
pub struct SubmitRegistrationHandler {
    repository: Arc<dyn RegistrationRepository>,
}

impl SubmitRegistrationHandler {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitRegistrationCommand,
    ) -> Result<Registration, RegistrationError> {
        let new = cmd.form.validate()?;

        let registration = Registration::submit(RegistrationId::new(), new, Timestamp::now());
        self.repository.insert(&registration).await?;

        tracing::info!(
            registration_id = %registration.id(),
            program_type = %registration.program_type(),
            "Registration submitted"
        );
        Ok(registration)
    }
}
