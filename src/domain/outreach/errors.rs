//! Outreach-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationErrors};

/// Errors from the contact and newsletter forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutreachError {
    /// The submitted form violated one or more field rules.
    Validation(ValidationErrors),
    /// Infrastructure error.
    Infrastructure(String),
}

impl OutreachError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OutreachError::Validation(_) => ErrorCode::ValidationFailed,
            OutreachError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            OutreachError::Validation(errors) => format!("Validation failed: {}", errors),
            OutreachError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OutreachError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OutreachError {}

impl From<ValidationErrors> for OutreachError {
    fn from(errors: ValidationErrors) -> Self {
        OutreachError::Validation(errors)
    }
}

impl From<DomainError> for OutreachError {
    fn from(err: DomainError) -> Self {
        OutreachError::Infrastructure(err.to_string())
    }
}
