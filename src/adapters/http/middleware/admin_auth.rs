//! Admin authentication middleware and extractor for axum.
//!
//! This module provides:
//! - `admin_auth_middleware` - Layer that validates Bearer tokens and injects the admin session into extensions
//! - `RequireAdmin` - Extractor that rejects requests without a validated admin session
//!
//! # Architecture
//!
//! The middleware uses the `AdminAuthenticator` port, so the token format is
//! an adapter detail.
//!
//! ```text
//! Request → admin_auth_middleware → injects AdminSession into extensions
//!                                            ↓
//!                                  Handler → RequireAdmin extractor reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::domain::foundation::{AdminSession, ErrorCode};
use crate::ports::AdminAuthenticator;

/// Admin auth middleware state - wraps the authenticator.
pub type AdminAuthState = Arc<dyn AdminAuthenticator>;

/// Validates `Authorization: Bearer <token>` headers.
///
/// - Valid token: injects the `AdminSession` and continues
/// - Missing token: continues without a session (`RequireAdmin` rejects later)
/// - Invalid or expired token: 401 Unauthorized
pub async fn admin_auth_middleware(
    State(authenticator): State<AdminAuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string);

    match token {
        Some(token) => match authenticator.validate(&token).await {
            Ok(session) => {
                request.extensions_mut().insert(session);
                next.run(request).await
            }
            Err(e) => ApiError::from(e).into_response(),
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires a validated admin session.
///
/// # Example
///
/// ```ignore
/// async fn stats(RequireAdmin(session): RequireAdmin) -> impl IntoResponse {
///     format!("session {}", session.session_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminSession);

impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AdminSession>()
                .cloned()
                .map(RequireAdmin)
                .ok_or(AdminRejection::Unauthenticated)
        })
    }
}

/// Rejection type for admin authentication failures.
#[derive(Debug, Clone)]
pub enum AdminRejection {
    /// No valid admin token was provided.
    Unauthenticated,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AdminRejection::Unauthenticated => "Admin authentication required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: message.to_string(),
                code: ErrorCode::Unauthorized.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use axum::extract::FromRequestParts;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn require_admin_extracts_session_from_extensions() {
        let session = AdminSession::start(Timestamp::now(), 60);
        let mut request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(session.clone());
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAdmin, AdminRejection> =
            RequireAdmin::from_request_parts(&mut parts, &()).await;

        let RequireAdmin(extracted) = result.unwrap();
        assert_eq!(extracted, session);
    }

    #[tokio::test]
    async fn require_admin_fails_without_session() {
        let request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAdmin, AdminRejection> =
            RequireAdmin::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AdminRejection::Unauthenticated)));
    }

    #[test]
    fn rejection_is_unauthorized() {
        let response = AdminRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
