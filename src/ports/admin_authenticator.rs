//! Admin authenticator port.
//!
//! Exchanges the shared admin password for a bearer token and validates
//! that token on every admin request. The token format (JWT, opaque, ...)
//! is an adapter concern.
//!
//! # Example
//!
//! ```ignore
//! let token = authenticator.login(&password).await?;
//! let session = authenticator.validate(&token.token).await?;
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AdminSession, AdminToken, AuthError};

/// Authenticates the administrator.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidCredentials` for a wrong password
/// - Return `AuthError::InvalidToken` for malformed or forged tokens
/// - Return `AuthError::TokenExpired` once the session TTL has passed
#[async_trait]
pub trait AdminAuthenticator: Send + Sync {
    /// Issue a session token for the correct password.
    async fn login(&self, password: &str) -> Result<AdminToken, AuthError>;

    /// Validate a bearer token and return its session.
    async fn validate(&self, token: &str) -> Result<AdminSession, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_authenticator_is_object_safe() {
        fn _accepts_dyn(_auth: &dyn AdminAuthenticator) {}
    }
}
