//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Longest email accepted by any form.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// A syntactically valid email address.
///
/// Checks are structural only (one `@`, non-empty local part, dotted domain
/// without empty labels, no whitespace); deliverability is never probed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and validates an email for the given form field.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let candidate = raw.trim();

        if candidate.is_empty() {
            return Err(ValidationError::empty_field(field));
        }

        let length = candidate.chars().count();
        if length > MAX_EMAIL_LENGTH {
            return Err(ValidationError::too_long(field, MAX_EMAIL_LENGTH, length));
        }

        if candidate.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(field, "contains whitespace"));
        }

        let (local, domain) = candidate
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format(field, "missing @ symbol"))?;

        if local.is_empty() {
            return Err(ValidationError::invalid_format(field, "missing local part"));
        }
        if domain.contains('@') {
            return Err(ValidationError::invalid_format(field, "more than one @ symbol"));
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(ValidationError::invalid_format(field, "invalid domain"));
        }

        Ok(Self(candidate.to_string()))
    }

    /// Wraps a value read back from storage without re-validating it.
    pub fn from_trusted(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
