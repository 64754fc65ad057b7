//! In-memory contact message repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::outreach::ContactMessage;
use crate::ports::ContactMessageRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryContactMessageRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl InMemoryContactMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored messages (useful for tests).
    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn insert(&self, message: &ContactMessage) -> Result<(), DomainError> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        Ok(self.messages.read().await.len() as u64)
    }

    async fn count_unread(&self) -> Result<u64, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages.iter().filter(|m| !m.is_read).count() as u64)
    }
}
