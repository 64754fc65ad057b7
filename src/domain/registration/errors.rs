//! Registration-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, RegistrationId, ValidationErrors};

use super::RegistrationStatus;

/// Registration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The submitted form violated one or more field rules.
    Validation(ValidationErrors),
    /// Another registration already uses this email.
    DuplicateEmail,
    /// No registration has this id.
    NotFound(RegistrationId),
    /// The configured transition policy refused the status change.
    InvalidTransition {
        from: RegistrationStatus,
        to: RegistrationStatus,
    },
    /// Infrastructure error.
    Infrastructure(String),
}

impl RegistrationError {
    pub fn not_found(id: RegistrationId) -> Self {
        RegistrationError::NotFound(id)
    }

    pub fn invalid_transition(from: RegistrationStatus, to: RegistrationStatus) -> Self {
        RegistrationError::InvalidTransition { from, to }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RegistrationError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::Validation(_) => ErrorCode::ValidationFailed,
            RegistrationError::DuplicateEmail => ErrorCode::DuplicateEmail,
            RegistrationError::NotFound(_) => ErrorCode::RegistrationNotFound,
            RegistrationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            RegistrationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RegistrationError::Validation(errors) => format!("Validation failed: {}", errors),
            RegistrationError::DuplicateEmail => "Email already registered".to_string(),
            RegistrationError::NotFound(id) => format!("Registration not found: {}", id),
            RegistrationError::InvalidTransition { from, to } => {
                format!("Cannot change status from {} to {}", from, to)
            }
            RegistrationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RegistrationError {}

impl From<ValidationErrors> for RegistrationError {
    fn from(errors: ValidationErrors) -> Self {
        RegistrationError::Validation(errors)
    }
}

impl From<DomainError> for RegistrationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateEmail => RegistrationError::DuplicateEmail,
            _ => RegistrationError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn duplicate_email_message_is_user_facing() {
        assert_eq!(
            RegistrationError::DuplicateEmail.to_string(),
            "Email already registered"
        );
        assert_eq!(RegistrationError::DuplicateEmail.code(), ErrorCode::DuplicateEmail);
    }

    #[test]
    fn unique_violation_from_store_becomes_duplicate_email() {
        let err: RegistrationError =
            DomainError::new(ErrorCode::DuplicateEmail, "unique violation").into();
        assert_eq!(err, RegistrationError::DuplicateEmail);
    }

    #[test]
    fn other_domain_errors_become_infrastructure() {
        let err: RegistrationError = DomainError::database("connection reset").into();
        assert!(matches!(err, RegistrationError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_errors_convert() {
        let err: RegistrationError =
            ValidationErrors::single(ValidationError::empty_field("phone")).into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn invalid_transition_names_both_states() {
        let err = RegistrationError::invalid_transition(
            RegistrationStatus::Completed,
            RegistrationStatus::Pending,
        );
        assert_eq!(err.to_string(), "Cannot change status from completed to pending");
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }
}
