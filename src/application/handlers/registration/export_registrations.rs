//! ExportRegistrationsHandler - Query handler for filtered CSV export.

use std::sync::Arc;

use crate::domain::registration::RegistrationError;
use crate::domain::review::{export_csv, RegistrationFilter};
use crate::ports::RegistrationRepository;

/// Query selecting which registrations to export.
#[derive(Debug, Clone, Default)]
pub struct ExportRegistrationsQuery {
    pub filter: RegistrationFilter,
}

/// Result of an export: the CSV text and how many data rows it holds.
#[derive(Debug, Clone)]
pub struct ExportRegistrationsResult {
    pub csv: String,
    pub row_count: usize,
}

/// Lists registrations newest first, applies the filter, renders CSV.
pub struct ExportRegistrationsHandler {
    repository: Arc<dyn RegistrationRepository>,
}

impl ExportRegistrationsHandler {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ExportRegistrationsQuery,
    ) -> Result<ExportRegistrationsResult, RegistrationError> {
        let registrations = self.repository.list_newest_first().await?;
        let visible = query.filter.apply(&registrations);
        let row_count = visible.len();

        tracing::debug!(row_count, "Exporting registrations");
        Ok(ExportRegistrationsResult {
            csv: export_csv(visible),
            row_count,
        })
    }
}
