//! Newsletter subscription repository port.

use crate::domain::foundation::{DomainError, EmailAddress, Timestamp};
use crate::domain::outreach::NewsletterSubscription;
use async_trait::async_trait;

/// Repository port for newsletter subscriptions, keyed by email.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Insert the email as active, or reactivate the existing row.
    ///
    /// Idempotent: the result is always active and there is never more than
    /// one row per email.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert_active(
        &self,
        email: &EmailAddress,
        now: Timestamp,
    ) -> Result<NewsletterSubscription, DomainError>;
}
