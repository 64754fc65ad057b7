//! Registration repository port.
//!
//! Defines the contract for persisting and querying Registration aggregates.
//!
//! # Design
//!
//! - **Store-enforced uniqueness**: email uniqueness is a property of the
//!   store (a unique index), not of a read-then-write in the caller. Two
//!   concurrent submissions with the same email cannot both succeed.
//! - **Independent counts**: every count is its own query so the dashboard
//!   can issue them concurrently.

use crate::domain::foundation::{DomainError, RegistrationId, Timestamp};
use crate::domain::registration::{ProgramType, Registration, RegistrationStatus};
use async_trait::async_trait;

/// Repository port for Registration persistence.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert a new registration.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if another registration already uses the email;
    ///   nothing is written in that case
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Find a registration by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError>;

    /// Every registration, newest first. Unfiltered and unpaginated.
    async fn list_newest_first(&self) -> Result<Vec<Registration>, DomainError>;

    /// Overwrite the status and refresh `updated_at`.
    ///
    /// Returns the updated registration, or `None` when no row has this id.
    async fn update_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
        now: Timestamp,
    ) -> Result<Option<Registration>, DomainError>;

    async fn count_all(&self) -> Result<u64, DomainError>;

    async fn count_by_status(&self, status: RegistrationStatus) -> Result<u64, DomainError>;

    async fn count_by_program(&self, program: ProgramType) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn registration_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RegistrationRepository) {}
    }
}
