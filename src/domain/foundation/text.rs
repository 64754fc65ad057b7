//! Length-bounded text checks shared by every form.

use super::ValidationError;

/// Validates a required text field.
///
/// Whitespace-only input counts as empty. The value is stored as given.
pub fn required_text(
    field: &str,
    value: Option<&str>,
    max: Option<usize>,
) -> Result<String, ValidationError> {
    let value = value.unwrap_or_default();
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    check_length(field, value, max)?;
    Ok(value.to_string())
}

/// Validates an optional text field. Empty strings mean "absent".
pub fn optional_text(
    field: &str,
    value: Option<&str>,
    max: Option<usize>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => {
            check_length(field, v, max)?;
            Ok(Some(v.to_string()))
        }
    }
}

/// Form fields whose submitted value was not text (a number, a list, ...).
///
/// Such a field fails with a format error instead of its usual check, so
/// the caller still gets one violation per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MistypedFields(Vec<String>);

impl MistypedFields {
    pub fn mark(&mut self, field: impl Into<String>) {
        self.0.push(field.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Runs `check` for `field` unless the field was mistyped.
    pub fn check<T>(
        &self,
        field: &str,
        check: impl FnOnce() -> Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        if self.contains(field) {
            Err(ValidationError::invalid_format(field, "must be text"))
        } else {
            check()
        }
    }
}

fn check_length(field: &str, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    if let Some(max) = max {
        let actual = value.chars().count();
        if actual > max {
            return Err(ValidationError::too_long(field, max, actual));
        }
    }
    Ok(())
}
