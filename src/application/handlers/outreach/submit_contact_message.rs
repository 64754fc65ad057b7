//! SubmitContactMessageHandler - Command handler for the public contact form.

use std::sync::Arc;

use crate::domain::foundation::{ContactMessageId, Timestamp};
use crate::domain::outreach::{ContactForm, ContactMessage, OutreachError};
use crate::ports::ContactMessageRepository;

/// Command carrying an untrusted contact form.
#[derive(Debug, Clone)]
pub struct SubmitContactMessageCommand {
    pub form: ContactForm,
}

/// Validates and stores one unread message. No uniqueness check.
pub struct SubmitContactMessageHandler {
    repository: Arc<dyn ContactMessageRepository>,
}

impl SubmitContactMessageHandler {
    pub fn new(repository: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, OutreachError> {
        let new = cmd.form.validate()?;
        let message = ContactMessage::receive(ContactMessageId::new(), new, Timestamp::now());
        self.repository.insert(&message).await?;

        tracing::info!(message_id = %message.id, "Contact message received");
        Ok(message)
    }
}
