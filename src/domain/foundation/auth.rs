//! Authentication types for the admin area.
//!
//! These types represent an authenticated administrator extracted from a
//! signed session token. They have **no external dependencies**: the token
//! format lives behind the `AdminAuthenticator` port.
//!
//! There is exactly one admin identity, unlocked by a shared password. The
//! session is what the server checks on every admin request; nothing the
//! browser stores on its own is trusted.

use thiserror::Error;
use uuid::Uuid;

use super::Timestamp;

/// Claims of a validated admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    /// Unique id of this login (the token's `jti`).
    pub session_id: Uuid,

    /// When the session was issued.
    pub issued_at: Timestamp,

    /// When the session stops being accepted.
    pub expires_at: Timestamp,
}

impl AdminSession {
    /// Creates a session starting at `issued_at` that lives for `ttl_secs`.
    pub fn start(issued_at: Timestamp, ttl_secs: u64) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            issued_at,
            expires_at: issued_at.plus_secs(ttl_secs),
        }
    }

    /// Returns true if the session is expired at `now`.
    pub fn is_expired_at(&self, now: &Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }
}

/// A freshly issued bearer token and the session it encodes.
#[derive(Debug, Clone)]
pub struct AdminToken {
    pub token: String,
    pub session: AdminSession,
}

/// Authentication errors for the admin area.
///
/// These errors are **domain-centric**: they describe what went wrong from
/// the application's perspective, not the token library's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The supplied admin password did not match.
    #[error("Invalid password")]
    InvalidCredentials,

    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// Token issuing failed for reasons unrelated to the caller.
    #[error("Authentication failed: {0}")]
    Internal(String),
}

impl AuthError {
    /// Returns true if this error indicates the admin should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
