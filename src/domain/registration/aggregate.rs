//! Registration aggregate entity.
//!
//! A registration is a prospective student's application to a program.
//! It is the only entity with a lifecycle: its review status moves under
//! admin action while everything else stays as submitted.

use crate::domain::foundation::{EmailAddress, RegistrationId, Timestamp};

use super::{ExperienceLevel, NewRegistration, ProgramType, RegistrationStatus, SchedulePreference};

/// Registration aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `email` is unique across registrations (enforced by the store)
/// - `status` starts as `Pending` whatever the caller asked for
/// - `created_at` and `program_type` never change
/// - `updated_at` is refreshed by every status write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: RegistrationId,
    first_name: String,
    last_name: String,
    email: EmailAddress,
    phone: String,
    current_role_title: Option<String>,
    experience_level: ExperienceLevel,
    program_type: ProgramType,
    areas_of_interest: Option<String>,
    schedule_preference: Option<SchedulePreference>,
    goals_expectations: Option<String>,
    terms_accepted: bool,
    status: RegistrationStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Registration {
    /// Creates a pending registration from a validated submission.
    pub fn submit(id: RegistrationId, new: NewRegistration, now: Timestamp) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            current_role_title: new.current_role_title,
            experience_level: new.experience_level,
            program_type: new.program_type,
            areas_of_interest: new.areas_of_interest,
            schedule_preference: new.schedule_preference,
            goals_expectations: new.goals_expectations,
            terms_accepted: true,
            status: RegistrationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a registration from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: RegistrationId,
        first_name: String,
        last_name: String,
        email: EmailAddress,
        phone: String,
        current_role_title: Option<String>,
        experience_level: ExperienceLevel,
        program_type: ProgramType,
        areas_of_interest: Option<String>,
        schedule_preference: Option<SchedulePreference>,
        goals_expectations: Option<String>,
        terms_accepted: bool,
        status: RegistrationStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            phone,
            current_role_title,
            experience_level,
            program_type,
            areas_of_interest,
            schedule_preference,
            goals_expectations,
            terms_accepted,
            status,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RegistrationId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn current_role_title(&self) -> Option<&str> {
        self.current_role_title.as_deref()
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    pub fn program_type(&self) -> ProgramType {
        self.program_type
    }

    pub fn areas_of_interest(&self) -> Option<&str> {
        self.areas_of_interest.as_deref()
    }

    pub fn schedule_preference(&self) -> Option<SchedulePreference> {
        self.schedule_preference
    }

    pub fn goals_expectations(&self) -> Option<&str> {
        self.goals_expectations.as_deref()
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns "First Last" for display and logs.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Overwrites the review status and refreshes `updated_at`.
    ///
    /// This is a flat set-to-value: transition rules, when configured, are
    /// checked by the caller against a `TransitionPolicy` first.
    /// Returns the previous status.
    pub fn set_status(&mut self, status: RegistrationStatus, now: Timestamp) -> RegistrationStatus {
        let previous = std::mem::replace(&mut self.status, status);
        self.updated_at = now;
        previous
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::registration;
    use super::*;

    #[test]
    fn submit_forces_pending_and_equal_timestamps() {
        let reg = registration("Ada", "Lovelace", "ada@example.com", "bootcamp");
        assert_eq!(reg.status(), RegistrationStatus::Pending);
        assert_eq!(reg.created_at(), reg.updated_at());
        assert!(reg.terms_accepted());
        assert_eq!(reg.program_type(), ProgramType::Bootcamp);
    }

    #[test]
    fn set_status_refreshes_updated_at_only() {
        let mut reg = registration("Ada", "Lovelace", "ada@example.com", "mentorship");
        let created = *reg.created_at();
        let later = created.plus_secs(30);

        let previous = reg.set_status(RegistrationStatus::Approved, later);

        assert_eq!(previous, RegistrationStatus::Pending);
        assert_eq!(reg.status(), RegistrationStatus::Approved);
        assert_eq!(reg.created_at(), &created);
        assert_eq!(reg.updated_at(), &later);
        assert_eq!(reg.program_type(), ProgramType::Mentorship);
    }

    #[test]
    fn repeated_identical_status_keeps_status_and_advances_updated_at() {
        let mut reg = registration("Ada", "Lovelace", "ada@example.com", "mentorship");
        let t1 = reg.created_at().plus_secs(1);
        let t2 = reg.created_at().plus_secs(2);

        reg.set_status(RegistrationStatus::Approved, t1);
        reg.set_status(RegistrationStatus::Approved, t2);

        assert_eq!(reg.status(), RegistrationStatus::Approved);
        assert_eq!(reg.updated_at(), &t2);
    }

    #[test]
    fn full_name_joins_names() {
        let reg = registration("Ada", "Lovelace", "ada@example.com", "mentorship");
        assert_eq!(reg.full_name(), "Ada Lovelace");
    }
}
