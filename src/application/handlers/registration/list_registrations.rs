//! ListRegistrationsHandler - Query handler for the admin registration list.

use std::sync::Arc;

use crate::domain::registration::{Registration, RegistrationError};
use crate::ports::RegistrationRepository;

/// Returns every registration, newest first.
pub struct ListRegistrationsHandler {
    repository: Arc<dyn RegistrationRepository>,
}

impl ListRegistrationsHandler {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Registration>, RegistrationError> {
        Ok(self.repository.list_newest_first().await?)
    }
}
