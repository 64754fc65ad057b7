//! UpdateRegistrationStatusHandler - Command handler for admin status changes.

use std::sync::Arc;

use crate::domain::foundation::{RegistrationId, Timestamp};
use crate::domain::registration::{
    Registration, RegistrationError, RegistrationStatus, TransitionPolicy,
};
use crate::ports::RegistrationRepository;

/// Command to set a registration's status.
#[derive(Debug, Clone)]
pub struct UpdateRegistrationStatusCommand {
    pub id: RegistrationId,
    pub status: RegistrationStatus,
}

/// Handler for status changes.
///
/// Under `TransitionPolicy::Open` this is a single flat write. Under
/// `Guarded` the current status is read first and checked against the
/// policy; the read and write are not atomic.
pub struct UpdateRegistrationStatusHandler {
    repository: Arc<dyn RegistrationRepository>,
    policy: TransitionPolicy,
}

impl UpdateRegistrationStatusHandler {
    pub fn new(repository: Arc<dyn RegistrationRepository>, policy: TransitionPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRegistrationStatusCommand,
    ) -> Result<Registration, RegistrationError> {
        if self.policy.needs_current_status() {
            let current = self
                .repository
                .find_by_id(&cmd.id)
                .await?
                .ok_or(RegistrationError::not_found(cmd.id))?;
            self.policy.check(current.status(), cmd.status)?;
        }

        let updated = self
            .repository
            .update_status(&cmd.id, cmd.status, Timestamp::now())
            .await?
            .ok_or(RegistrationError::not_found(cmd.id))?;

        tracing::info!(
            registration_id = %cmd.id,
            status = %cmd.status,
            "Registration status updated"
        );
        Ok(updated)
    }
}
