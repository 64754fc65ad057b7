//! Registration form validation.
//!
//! `RegistrationForm` is what arrives over the wire; `NewRegistration` is
//! what survives validation. Every violation is collected so the caller can
//! show all field errors at once.

use crate::domain::foundation::{
    optional_text, required_text, EmailAddress, MistypedFields, ValidationError,
    ValidationErrors,
};

use super::{ExperienceLevel, ProgramType, SchedulePreference};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 20;
pub const MAX_ROLE_LENGTH: usize = 200;
pub const MAX_INTERESTS_LENGTH: usize = 500;

/// Untrusted registration payload.
///
/// `status` exists only so that a caller-supplied value can be accepted and
/// then ignored; new registrations always start pending.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub current_role: Option<String>,
    pub experience_level: Option<String>,
    pub program_type: Option<String>,
    pub areas_of_interest: Option<String>,
    pub schedule_preference: Option<String>,
    pub goals_expectations: Option<String>,
    /// `None` when the field was missing or not a JSON boolean.
    pub terms_accepted: Option<bool>,
    pub status: Option<String>,
    /// Fields that arrived with a non-text value.
    pub mistyped: MistypedFields,
}

/// A registration payload that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub current_role_title: Option<String>,
    pub experience_level: ExperienceLevel,
    pub program_type: ProgramType,
    pub areas_of_interest: Option<String>,
    pub schedule_preference: Option<SchedulePreference>,
    pub goals_expectations: Option<String>,
}

impl RegistrationForm {
    /// Validates the form, reporting every violated field.
    pub fn validate(&self) -> Result<NewRegistration, ValidationErrors> {
        let mut errors = Vec::new();

        let m = &self.mistyped;

        let first_name = collect(
            &mut errors,
            m.check("first_name", || {
                required_text("first_name", self.first_name.as_deref(), Some(MAX_NAME_LENGTH))
            }),
        );
        let last_name = collect(
            &mut errors,
            m.check("last_name", || {
                required_text("last_name", self.last_name.as_deref(), Some(MAX_NAME_LENGTH))
            }),
        );
        let email = collect(
            &mut errors,
            m.check("email", || {
                EmailAddress::parse("email", self.email.as_deref().unwrap_or_default())
            }),
        );
        let phone = collect(
            &mut errors,
            m.check("phone", || {
                required_text("phone", self.phone.as_deref(), Some(MAX_PHONE_LENGTH))
            }),
        );
        let current_role_title = collect(
            &mut errors,
            m.check("current_role", || {
                optional_text("current_role", self.current_role.as_deref(), Some(MAX_ROLE_LENGTH))
            }),
        );
        let experience_level = collect(
            &mut errors,
            m.check("experience_level", || {
                ExperienceLevel::parse("experience_level", self.experience_level.as_deref())
            }),
        );
        let program_type = collect(
            &mut errors,
            m.check("program_type", || {
                ProgramType::parse("program_type", self.program_type.as_deref())
            }),
        );
        let areas_of_interest = collect(
            &mut errors,
            m.check("areas_of_interest", || {
                optional_text(
                    "areas_of_interest",
                    self.areas_of_interest.as_deref(),
                    Some(MAX_INTERESTS_LENGTH),
                )
            }),
        );
        let schedule_preference = collect(
            &mut errors,
            m.check("schedule_preference", || {
                SchedulePreference::parse_optional(
                    "schedule_preference",
                    self.schedule_preference.as_deref(),
                )
            }),
        );
        let goals_expectations = collect(
            &mut errors,
            m.check("goals_expectations", || {
                optional_text("goals_expectations", self.goals_expectations.as_deref(), None)
            }),
        );
        if self.terms_accepted != Some(true) {
            errors.push(ValidationError::must_be_accepted("terms_accepted"));
        }

        ValidationErrors::check(errors)?;

        // Every collected value is `Some` once no violation was recorded.
        let (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(phone),
            Some(current_role_title),
            Some(experience_level),
            Some(program_type),
            Some(areas_of_interest),
            Some(schedule_preference),
            Some(goals_expectations),
        ) = (
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
        )
        else {
            return Err(ValidationErrors::single(ValidationError::empty_field("form")));
        };

        Ok(NewRegistration {
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
        })
    }
}

/// Records a failed check and keeps going.
pub(crate) fn collect<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}
