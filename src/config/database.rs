//! PostgreSQL settings for the registration, contact and newsletter stores.

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on `pool_size`.
const POOL_SIZE_CEILING: u32 = 100;

/// Where the stores live and how many connections they may hold.
///
/// Only `url` is required. The remaining keys size the pool and are read
/// from `CLOUDSDEW__DATABASE__*`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    /// Connections the pool may open at once.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// Connections kept open while the site is quiet.
    #[serde(default = "default_min_idle")]
    pub min_idle: u32,

    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Idle connections older than this are closed.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Run `migrations/` at startup.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Pool options derived from these settings, not yet connected.
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.pool_size)
            .min_connections(self.min_idle)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }

    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options().connect(&self.url).await
    }

    /// The URL with its password masked, for the startup log line.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.split_once('@') {
            Some((userinfo, host)) => {
                let user = userinfo.split(':').next().unwrap_or_default();
                format!("{scheme}://{user}:***@{host}")
            }
            None => self.url.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !is_postgres_url(&self.url) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.pool_size > POOL_SIZE_CEILING {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.min_idle > self.pool_size {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

fn is_postgres_url(url: &str) -> bool {
    matches!(url.split_once("://"), Some(("postgres" | "postgresql", _)))
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_size: default_pool_size(),
            min_idle: default_min_idle(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            run_migrations: false,
        }
    }
}

fn default_pool_size() -> u32 {
    10
}

fn default_min_idle() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    300
}
