//! Dashboard counters.

use serde::{Deserialize, Serialize};

/// Aggregate counts shown at the top of the admin dashboard.
///
/// Each count is an independent snapshot; they are not read in one
/// transaction and may be mutually inconsistent under concurrent writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_registrations: u64,
    pub pending_registrations: u64,
    pub total_messages: u64,
    pub unread_messages: u64,
    pub mentorship_registrations: u64,
    pub bootcamp_registrations: u64,
}
