//! Mapping of sqlx failures onto domain errors.

use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Wraps a sqlx error as a `DatabaseError`, naming the failed action.
pub(crate) fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

/// Like `db_error`, but a unique violation on an insert means a duplicate email.
pub(crate) fn insert_error(action: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return DomainError::new(ErrorCode::DuplicateEmail, "Email already registered")
                .with_detail("constraint", db_err.constraint().unwrap_or("unknown"));
        }
    }
    db_error(action, e)
}

/// Reads one column, reporting the column name on failure.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

/// Converts a text column back into an enum, rejecting unknown values.
pub(crate) fn parse_enum<T>(
    name: &str,
    value: &str,
    from_wire: impl Fn(&str) -> Option<T>,
) -> Result<T, DomainError> {
    from_wire(value).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {}: {}", name, value),
        )
    })
}
