//! PostgreSQL implementation of NewsletterRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EmailAddress, SubscriptionId, Timestamp};
use crate::domain::outreach::NewsletterSubscription;
use crate::ports::NewsletterRepository;

use super::error::{column, db_error};

#[derive(Clone)]
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn upsert_active(
        &self,
        email: &EmailAddress,
        now: Timestamp,
    ) -> Result<NewsletterSubscription, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO newsletter_subscriptions (id, email, is_active, subscribed_at, updated_at)
            VALUES ($1, $2, TRUE, $3, $3)
            ON CONFLICT (email) DO UPDATE
                SET is_active = TRUE, updated_at = EXCLUDED.updated_at
            RETURNING id, email, is_active, subscribed_at, updated_at
            "#,
        )
        .bind(SubscriptionId::new().as_uuid())
        .bind(email.as_str())
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("upsert newsletter subscription", e))?;

        let id: uuid::Uuid = column(&row, "id")?;
        let email: String = column(&row, "email")?;
        let subscribed_at: DateTime<Utc> = column(&row, "subscribed_at")?;
        let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

        Ok(NewsletterSubscription {
            id: SubscriptionId::from_uuid(id),
            email: EmailAddress::from_trusted(email),
            is_active: column(&row, "is_active")?,
            subscribed_at: Timestamp::from_datetime(subscribed_at),
            updated_at: Timestamp::from_datetime(updated_at),
        })
    }
}
