//! Contact message repository port.

use crate::domain::foundation::DomainError;
use crate::domain::outreach::ContactMessage;
use async_trait::async_trait;

/// Repository port for contact messages. Create-only; duplicates allowed.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Insert a new message.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, message: &ContactMessage) -> Result<(), DomainError>;

    async fn count_all(&self) -> Result<u64, DomainError>;

    /// Messages with `is_read = false`.
    async fn count_unread(&self) -> Result<u64, DomainError>;
}
