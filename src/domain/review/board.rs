//! Admin review session state.
//!
//! `ReviewBoard` holds what the admin is looking at: the last fetched list,
//! the last fetched stats, and the current filter. Status changes are applied
//! locally first and replaced by server truth on the next `reconcile`.

use crate::domain::foundation::{RegistrationId, Timestamp};
use crate::domain::registration::{ProgramType, Registration, RegistrationStatus};

use super::{export_csv, DashboardStats, RegistrationFilter};

#[derive(Debug, Clone, Default)]
pub struct ReviewBoard {
    registrations: Vec<Registration>,
    stats: DashboardStats,
    filter: RegistrationFilter,
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces local state with a fresh server snapshot. The filter is kept.
    pub fn reconcile(&mut self, registrations: Vec<Registration>, stats: DashboardStats) {
        self.registrations = registrations;
        self.stats = stats;
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn filter(&self) -> &RegistrationFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_status_filter(&mut self, status: Option<RegistrationStatus>) {
        self.filter.status = status;
    }

    pub fn set_program_filter(&mut self, program: Option<ProgramType>) {
        self.filter.program = program;
    }

    pub fn clear_filters(&mut self) {
        self.filter = RegistrationFilter::default();
    }

    /// Registrations passing the current filter, in list order.
    pub fn visible(&self) -> Vec<&Registration> {
        self.filter.apply(&self.registrations)
    }

    /// Applies a status change optimistically.
    ///
    /// The pending counter follows the actual transition: leaving pending
    /// decrements it, entering pending increments it, anything else leaves it
    /// alone. Returns false (and changes nothing) for an unknown id.
    pub fn apply_status_change(
        &mut self,
        id: &RegistrationId,
        status: RegistrationStatus,
        now: Timestamp,
    ) -> bool {
        let Some(registration) = self.registrations.iter_mut().find(|r| r.id() == id) else {
            return false;
        };

        let previous = registration.set_status(status, now);
        match (previous.is_pending(), status.is_pending()) {
            (true, false) => {
                self.stats.pending_registrations = self.stats.pending_registrations.saturating_sub(1)
            }
            (false, true) => self.stats.pending_registrations += 1,
            _ => {}
        }
        true
    }

    /// CSV of the currently visible rows.
    pub fn export_visible_csv(&self) -> String {
        export_csv(self.visible())
    }
}
