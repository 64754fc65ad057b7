//! GetDashboardStatsHandler - Query handler for the admin dashboard counters.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::registration::{ProgramType, RegistrationStatus};
use crate::domain::review::DashboardStats;
use crate::ports::{ContactMessageRepository, RegistrationRepository};

/// Computes the six dashboard counts.
///
/// The counts are independent queries run concurrently; no transaction
/// spans them. A failing count is logged and reported as zero. Only when
/// every count fails does the query fail.
pub struct GetDashboardStatsHandler {
    registrations: Arc<dyn RegistrationRepository>,
    messages: Arc<dyn ContactMessageRepository>,
}

impl GetDashboardStatsHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        messages: Arc<dyn ContactMessageRepository>,
    ) -> Self {
        Self {
            registrations,
            messages,
        }
    }

    pub async fn handle(&self) -> Result<DashboardStats, DomainError> {
        let (total, pending, messages, unread, mentorship, bootcamp) = tokio::join!(
            self.registrations.count_all(),
            self.registrations.count_by_status(RegistrationStatus::Pending),
            self.messages.count_all(),
            self.messages.count_unread(),
            self.registrations.count_by_program(ProgramType::Mentorship),
            self.registrations.count_by_program(ProgramType::Bootcamp),
        );

        let counts = [
            ("total_registrations", total),
            ("pending_registrations", pending),
            ("total_messages", messages),
            ("unread_messages", unread),
            ("mentorship_registrations", mentorship),
            ("bootcamp_registrations", bootcamp),
        ];
        if counts.iter().all(|(_, result)| result.is_err()) {
            tracing::error!("Every dashboard count failed");
            return Err(DomainError::database("Failed to fetch stats"));
        }

        let [total, pending, messages, unread, mentorship, bootcamp] = counts.map(or_zero);
        Ok(DashboardStats {
            total_registrations: total,
            pending_registrations: pending,
            total_messages: messages,
            unread_messages: unread,
            mentorship_registrations: mentorship,
            bootcamp_registrations: bootcamp,
        })
    }
}

fn or_zero((name, result): (&'static str, Result<u64, DomainError>)) -> u64 {
    result.unwrap_or_else(|e| {
        tracing::warn!(count = name, error = %e, "Dashboard count failed, reporting 0");
        0
    })
}
