//! JWT adapter for the admin gate.
//!
//! Implements the `AdminAuthenticator` port with a shared password and
//! HS256-signed session tokens:
//!
//! 1. The configured password is stored only as a SHA-256 digest
//! 2. Login compares digests in constant time
//! 3. Tokens carry `sub = "admin"`, `jti`, `iat`, and `exp`
//! 4. Validation checks signature, subject, and expiry (no leeway)
//!
//! # Example
//!
//! ```ignore
//! use cloudsdew::adapters::auth::JwtAdminAuthenticator;
//! use cloudsdew::ports::AdminAuthenticator;
//!
//! let auth = JwtAdminAuthenticator::new(password, token_secret, 8 * 3600);
//! let token = auth.login("correct horse").await?;
//! let session = auth.validate(&token.token).await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::foundation::{AdminSession, AdminToken, AuthError, Timestamp};
use crate::ports::AdminAuthenticator;

/// Subject claim of every admin token.
const ADMIN_SUBJECT: &str = "admin";

/// Claims of an admin session token.
#[derive(Debug, Serialize, Deserialize)]
struct AdminClaims {
    sub: String,
    jti: String,
    iat: i64,
    exp: i64,
}

impl AdminClaims {
    fn from_session(session: &AdminSession) -> Self {
        Self {
            sub: ADMIN_SUBJECT.to_string(),
            jti: session.session_id.to_string(),
            iat: session.issued_at.as_unix_secs(),
            exp: session.expires_at.as_unix_secs(),
        }
    }

    fn into_session(self) -> Result<AdminSession, AuthError> {
        let session_id = Uuid::parse_str(&self.jti).map_err(|_| AuthError::InvalidToken)?;
        let issued_at = Timestamp::from_unix_secs(self.iat).ok_or(AuthError::InvalidToken)?;
        let expires_at = Timestamp::from_unix_secs(self.exp).ok_or(AuthError::InvalidToken)?;
        Ok(AdminSession {
            session_id,
            issued_at,
            expires_at,
        })
    }
}

/// Admin authenticator backed by a shared password and HS256 tokens.
pub struct JwtAdminAuthenticator {
    password_digest: [u8; 32],
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_ttl_secs: u64,
}

impl JwtAdminAuthenticator {
    pub fn new(password: &SecretString, token_secret: &SecretString, session_ttl_secs: u64) -> Self {
        let secret = token_secret.expose_secret().as_bytes();
        Self {
            password_digest: digest(password.expose_secret()),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            session_ttl_secs,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.sub = Some(ADMIN_SUBJECT.to_string());
        validation
    }
}

fn digest(value: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(value.as_bytes()));
    out
}

#[async_trait]
impl AdminAuthenticator for JwtAdminAuthenticator {
    async fn login(&self, password: &str) -> Result<AdminToken, AuthError> {
        let candidate = digest(password);
        if !bool::from(candidate.ct_eq(&self.password_digest)) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = AdminSession::start(Timestamp::now(), self.session_ttl_secs);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &AdminClaims::from_session(&session),
            &self.encoding_key,
        )
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(AdminToken { token, session })
    }

    async fn validate(&self, token: &str) -> Result<AdminSession, AuthError> {
        let data = decode::<AdminClaims>(token, &self.decoding_key, &Self::validation()).map_err(
            |e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Admin token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::warn!("Admin token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            },
        )?;

        data.claims.into_session()
    }
}

impl std::fmt::Debug for JwtAdminAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAdminAuthenticator")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish_non_exhaustive()
    }
}
