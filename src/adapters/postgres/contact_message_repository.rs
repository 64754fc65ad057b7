//! PostgreSQL implementation of ContactMessageRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::outreach::ContactMessage;
use crate::ports::ContactMessageRepository;

use super::error::db_error;

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn insert(&self, message: &ContactMessage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (
                id, name, email, phone, subject, message, is_read, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(&message.name)
        .bind(message.email.as_str())
        .bind(message.phone.as_deref())
        .bind(message.subject.as_deref())
        .bind(&message.message)
        .bind(message.is_read)
        .bind(message.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert contact message", e))?;

        Ok(())
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count contact messages", e))?;

        Ok(result.0 as u64)
    }

    async fn count_unread(&self) -> Result<u64, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contact_messages WHERE is_read = FALSE")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("count unread contact messages", e))?;

        Ok(result.0 as u64)
    }
}
