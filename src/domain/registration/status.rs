//! RegistrationStatus enum and the review transition policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{TransitionTable, ValidationError};

use super::RegistrationError;

/// Review status of a registration. The only field an admin changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 4] = [
        RegistrationStatus::Pending,
        RegistrationStatus::Approved,
        RegistrationStatus::Rejected,
        RegistrationStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Rejected => "rejected",
            RegistrationStatus::Completed => "completed",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }

    pub fn parse(field: &str, value: Option<&str>) -> Result<Self, ValidationError> {
        value
            .and_then(Self::from_wire)
            .ok_or_else(|| ValidationError::not_allowed(field, &Self::ALL.map(|v| v.as_str())))
    }

    /// Returns true if the registration still awaits a decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, RegistrationStatus::Pending)
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which status changes an admin may make.
///
/// - `Open`: any status may be set from any status (flat set-to-value).
/// - `Guarded`: `Completed` is terminal; everything else stays open.
///   Re-setting `Completed` on a completed registration is allowed so that
///   repeated identical updates stay idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    #[default]
    Open,
    Guarded,
}

impl TransitionPolicy {
    /// Returns true if this policy ever rejects a transition, meaning the
    /// current status must be read before writing.
    pub fn needs_current_status(&self) -> bool {
        matches!(self, TransitionPolicy::Guarded)
    }

    /// Checks a status change against this policy.
    pub fn check(
        &self,
        from: RegistrationStatus,
        to: RegistrationStatus,
    ) -> Result<(), RegistrationError> {
        if self.can_transition(&from, &to) {
            Ok(())
        } else {
            Err(RegistrationError::invalid_transition(from, to))
        }
    }
}

impl TransitionTable<RegistrationStatus> for TransitionPolicy {
    fn can_transition(&self, from: &RegistrationStatus, to: &RegistrationStatus) -> bool {
        use RegistrationStatus::*;
        match self {
            TransitionPolicy::Open => true,
            TransitionPolicy::Guarded => !matches!((from, to), (Completed, target) if *target != Completed),
        }
    }

    fn valid_transitions(&self, from: &RegistrationStatus) -> Vec<RegistrationStatus> {
        RegistrationStatus::ALL
            .into_iter()
            .filter(|to| self.can_transition(from, to))
            .collect()
    }
}
