//! HTTP DTOs for the admin endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AdminToken, RegistrationId, Timestamp, ValidationError, ValidationErrors,
};
use crate::domain::registration::{collect, RegistrationStatus};
use crate::domain::review::RegistrationFilter;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest").finish_non_exhaustive()
    }
}

/// Body of `PUT /api/admin/registrations`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: Option<String>,
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    /// Parses both fields, reporting every problem.
    pub fn parse(&self) -> Result<(RegistrationId, RegistrationStatus), ValidationErrors> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let id = collect(
            &mut errors,
            match self.id.as_deref() {
                None | Some("") => Err(ValidationError::empty_field("id")),
                Some(raw) => raw
                    .parse::<RegistrationId>()
                    .map_err(|_| ValidationError::invalid_format("id", "must be a UUID")),
            },
        );
        let status = collect(
            &mut errors,
            RegistrationStatus::parse("status", self.status.as_deref()),
        );
        ValidationErrors::check(errors)?;

        match (id, status) {
            (Some(id), Some(status)) => Ok((id, status)),
            _ => Err(ValidationErrors::single(ValidationError::empty_field("id"))),
        }
    }
}

/// Query string of the CSV export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub program: Option<String>,
}

impl ExportParams {
    pub fn to_filter(&self) -> Result<RegistrationFilter, ValidationErrors> {
        RegistrationFilter::from_query(
            self.search.as_deref(),
            self.status.as_deref(),
            self.program.as_deref(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: Timestamp,
}

impl From<AdminToken> for LoginResponse {
    fn from(token: AdminToken) -> Self {
        Self {
            token: token.token,
            expires_at: token.session.expires_at,
        }
    }
}
