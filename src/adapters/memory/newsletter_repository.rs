//! In-memory newsletter repository keyed by email.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EmailAddress, SubscriptionId, Timestamp};
use crate::domain::outreach::NewsletterSubscription;
use crate::ports::NewsletterRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryNewsletterRepository {
    subscriptions: Arc<RwLock<HashMap<String, NewsletterSubscription>>>,
}

impl InMemoryNewsletterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.subscriptions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.subscriptions.read().await.is_empty()
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryNewsletterRepository {
    async fn upsert_active(
        &self,
        email: &EmailAddress,
        now: Timestamp,
    ) -> Result<NewsletterSubscription, DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        let subscription = subscriptions
            .entry(email.as_str().to_string())
            .and_modify(|s| s.reactivate(now))
            .or_insert_with(|| NewsletterSubscription::subscribe(SubscriptionId::new(), email.clone(), now));
        Ok(subscription.clone())
    }
}
