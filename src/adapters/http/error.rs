//! Uniform HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`. The variants follow the
//! failure classes of the API:
//!
//! | Variant | Status | Code |
//! |---|---|---|
//! | `Validation` | 400 | `VALIDATION_FAILED` (with per-field details) |
//! | `BadRequest` | 400 | `BAD_REQUEST` |
//! | `DuplicateEmail` | 400 | `DUPLICATE_EMAIL` |
//! | `Unauthorized` | 401 | `UNAUTHORIZED` |
//! | `NotFound` | 404 | carried code, e.g. `REGISTRATION_NOT_FOUND` |
//! | `Conflict` | 409 | `INVALID_STATE_TRANSITION` |
//! | `Internal` | 500 | `INTERNAL_ERROR` (detail logged, never returned) |

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationErrors};
use crate::domain::outreach::OutreachError;
use crate::domain::registration::RegistrationError;

/// Error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldErrorDto>>,
}

/// One field violation inside a validation error body.
#[derive(Debug, Serialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationErrors),
    BadRequest(String),
    DuplicateEmail,
    Unauthorized(String),
    NotFound(ErrorCode, String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation failed".to_string(),
                    code: ErrorCode::ValidationFailed.to_string(),
                    details: Some(
                        errors
                            .errors()
                            .iter()
                            .map(|e| FieldErrorDto {
                                field: e.field().to_string(),
                                message: e.to_string(),
                            })
                            .collect(),
                    ),
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    code: "BAD_REQUEST".to_string(),
                    details: None,
                },
            ),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Email already registered".to_string(),
                    code: ErrorCode::DuplicateEmail.to_string(),
                    details: None,
                },
            ),
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: msg,
                    code: ErrorCode::Unauthorized.to_string(),
                    details: None,
                },
            ),
            ApiError::NotFound(code, msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: msg,
                    code: code.to_string(),
                    details: None,
                },
            ),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: msg,
                    code: ErrorCode::InvalidStateTransition.to_string(),
                    details: None,
                },
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        code: ErrorCode::InternalError.to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Validation(errors) => ApiError::Validation(errors),
            RegistrationError::DuplicateEmail => ApiError::DuplicateEmail,
            RegistrationError::NotFound(_) => ApiError::NotFound(err.code(), err.message()),
            RegistrationError::InvalidTransition { .. } => ApiError::Conflict(err.message()),
            RegistrationError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<OutreachError> for ApiError {
    fn from(err: OutreachError) -> Self {
        match err {
            OutreachError::Validation(errors) => ApiError::Validation(errors),
            OutreachError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Internal(msg) => ApiError::Internal(msg),
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateEmail => ApiError::DuplicateEmail,
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RegistrationId, ValidationError};
    use crate::domain::registration::RegistrationStatus;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn registration_errors_map_to_statuses() {
        assert_eq!(
            status_of(RegistrationError::DuplicateEmail.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(RegistrationError::NotFound(RegistrationId::new()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(
                RegistrationError::invalid_transition(
                    RegistrationStatus::Completed,
                    RegistrationStatus::Pending
                )
                .into()
            ),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(RegistrationError::infrastructure("db down").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn missing_registration_carries_its_own_code() {
        let id = RegistrationId::new();
        let response = ApiError::from(RegistrationError::NotFound(id)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "REGISTRATION_NOT_FOUND");
        assert_eq!(body["error"], format!("Registration not found: {id}"));
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err: ApiError = ValidationErrors::single(ValidationError::empty_field("email")).into();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_errors_map_to_unauthorized_except_internal() {
        assert_eq!(
            status_of(AuthError::InvalidCredentials.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AuthError::TokenExpired.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(AuthError::Internal("signing failed".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
