//! Admin area configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::registration::TransitionPolicy;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest HS256 signing key accepted in production.
pub const MIN_TOKEN_SECRET_BYTES: usize = 32;

/// Longest admin session accepted (one week).
pub const MAX_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Admin login and review settings
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Shared admin password
    pub password: SecretString,

    /// HS256 key for session tokens
    pub token_secret: SecretString,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Which status changes are permitted (`open` or `guarded`)
    #[serde(default)]
    pub status_transitions: TransitionPolicy,
}

impl AdminConfig {
    /// Validate admin configuration
    ///
    /// Short signing keys are tolerated outside production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN__PASSWORD"));
        }
        let secret_len = self.token_secret.expose_secret().len();
        if secret_len == 0 {
            return Err(ValidationError::MissingRequired("ADMIN__TOKEN_SECRET"));
        }
        if *environment == Environment::Production && secret_len < MIN_TOKEN_SECRET_BYTES {
            return Err(ValidationError::TokenSecretTooShort(MIN_TOKEN_SECRET_BYTES));
        }
        if self.session_ttl_secs == 0 || self.session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ValidationError::InvalidSessionTtl(MAX_SESSION_TTL_SECS));
        }
        Ok(())
    }
}

fn default_session_ttl() -> u64 {
    8 * 60 * 60
}
