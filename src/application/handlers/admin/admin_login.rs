//! AdminLoginHandler - Command handler exchanging the admin password for a token.

use std::sync::Arc;

use crate::domain::foundation::{AdminToken, AuthError};
use crate::ports::AdminAuthenticator;

/// Command carrying the password typed into the admin gate.
#[derive(Clone)]
pub struct AdminLoginCommand {
    pub password: String,
}

impl std::fmt::Debug for AdminLoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminLoginCommand")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

pub struct AdminLoginHandler {
    authenticator: Arc<dyn AdminAuthenticator>,
}

impl AdminLoginHandler {
    pub fn new(authenticator: Arc<dyn AdminAuthenticator>) -> Self {
        Self { authenticator }
    }

    pub async fn handle(&self, cmd: AdminLoginCommand) -> Result<AdminToken, AuthError> {
        match self.authenticator.login(&cmd.password).await {
            Ok(token) => {
                tracing::info!(session_id = %token.session.session_id, "Admin logged in");
                Ok(token)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Admin login rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AdminSession, Timestamp};
    use async_trait::async_trait;

    struct FixedPassword(&'static str);

    #[async_trait]
    impl AdminAuthenticator for FixedPassword {
        async fn login(&self, password: &str) -> Result<AdminToken, AuthError> {
            if password == self.0 {
                Ok(AdminToken {
                    token: "token".to_string(),
                    session: AdminSession::start(Timestamp::now(), 60),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }

        async fn validate(&self, _token: &str) -> Result<AdminSession, AuthError> {
            Err(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn correct_password_issues_token() {
        let handler = AdminLoginHandler::new(Arc::new(FixedPassword("s3cret")));
        let token = handler
            .handle(AdminLoginCommand {
                password: "s3cret".into(),
            })
            .await
            .unwrap();
        assert_eq!(token.token, "token");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let handler = AdminLoginHandler::new(Arc::new(FixedPassword("s3cret")));
        let err = handler
            .handle(AdminLoginCommand {
                password: "guess".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn debug_redacts_password() {
        let cmd = AdminLoginCommand {
            password: "s3cret".into(),
        };
        assert!(!format!("{:?}", cmd).contains("s3cret"));
    }
}
