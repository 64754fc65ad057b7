//! SubscribeNewsletterHandler - Command handler for newsletter signups.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::outreach::{NewsletterForm, NewsletterSubscription, OutreachError};
use crate::ports::NewsletterRepository;

/// Command carrying an untrusted newsletter form.
#[derive(Debug, Clone)]
pub struct SubscribeNewsletterCommand {
    pub form: NewsletterForm,
}

/// Validates the email and upserts an active subscription.
pub struct SubscribeNewsletterHandler {
    repository: Arc<dyn NewsletterRepository>,
}

impl SubscribeNewsletterHandler {
    pub fn new(repository: Arc<dyn NewsletterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubscribeNewsletterCommand,
    ) -> Result<NewsletterSubscription, OutreachError> {
        let email = cmd.form.validate()?;
        let subscription = self.repository.upsert_active(&email, Timestamp::now()).await?;

        tracing::info!(subscription_id = %subscription.id, "Newsletter subscription active");
        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryNewsletterRepository;

    fn command(email: &str) -> SubscribeNewsletterCommand {
        SubscribeNewsletterCommand {
            form: NewsletterForm {
                email: Some(email.to_string()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn subscribing_twice_is_idempotent() {
        let repo = Arc::new(InMemoryNewsletterRepository::new());
        let handler = SubscribeNewsletterHandler::new(repo.clone());

        handler.handle(command("reader@example.com")).await.unwrap();
        let again = handler.handle(command("reader@example.com")).await.unwrap();

        assert!(again.is_active);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let repo = Arc::new(InMemoryNewsletterRepository::new());
        let handler = SubscribeNewsletterHandler::new(repo.clone());

        let err = handler.handle(command("not-an-email")).await.unwrap_err();

        assert!(matches!(err, OutreachError::Validation(_)));
        assert!(repo.is_empty().await);
    }
}
