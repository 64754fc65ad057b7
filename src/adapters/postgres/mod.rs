//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresRegistrationRepository` - Registrations with a unique email index
//! - `PostgresContactMessageRepository` - Contact messages
//! - `PostgresNewsletterRepository` - Newsletter upserts keyed by email
//!
//! Schema lives in `migrations/` and is applied with `sqlx::migrate!`.

mod contact_message_repository;
mod error;
mod newsletter_repository;
mod registration_repository;

pub use contact_message_repository::PostgresContactMessageRepository;
pub use newsletter_repository::PostgresNewsletterRepository;
pub use registration_repository::PostgresRegistrationRepository;

use sqlx::PgPool;

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
