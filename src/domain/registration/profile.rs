//! Enumerated profile fields of a registration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Self-reported experience of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Parses the exact wire value; anything else is `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }

    /// Parses a form field, reporting the accepted values on failure.
    pub fn parse(field: &str, value: Option<&str>) -> Result<Self, ValidationError> {
        value
            .and_then(Self::from_wire)
            .ok_or_else(|| ValidationError::not_allowed(field, &Self::ALL.map(|v| v.as_str())))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The program applied for. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    Mentorship,
    Bootcamp,
}

impl ProgramType {
    pub const ALL: [ProgramType; 2] = [ProgramType::Mentorship, ProgramType::Bootcamp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Mentorship => "mentorship",
            ProgramType::Bootcamp => "bootcamp",
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
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When the applicant prefers to attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulePreference {
    Weekdays,
    Evenings,
    Weekends,
    Flexible,
}

impl SchedulePreference {
    pub const ALL: [SchedulePreference; 4] = [
        SchedulePreference::Weekdays,
        SchedulePreference::Evenings,
        SchedulePreference::Weekends,
        SchedulePreference::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulePreference::Weekdays => "weekdays",
            SchedulePreference::Evenings => "evenings",
            SchedulePreference::Weekends => "weekends",
            SchedulePreference::Flexible => "flexible",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }

    /// Parses an optional form field. Missing or empty input means "no preference".
    pub fn parse_optional(field: &str, value: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match value {
            None | Some("") => Ok(None),
            Some(v) => Self::from_wire(v).map(Some).ok_or_else(|| {
                ValidationError::not_allowed(field, &Self::ALL.map(|v| v.as_str()))
            }),
        }
    }
}

impl fmt::Display for SchedulePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_level_parses_exact_values_only() {
        assert_eq!(
            ExperienceLevel::parse("experience_level", Some("advanced")),
            Ok(ExperienceLevel::Advanced)
        );
        assert!(ExperienceLevel::parse("experience_level", Some("Advanced")).is_err());
        assert!(ExperienceLevel::parse("experience_level", Some("expert")).is_err());
        assert!(ExperienceLevel::parse("experience_level", None).is_err());
    }

    #[test]
    fn program_type_error_lists_choices() {
        let err = ProgramType::parse("program_type", Some("degree")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::not_allowed("program_type", &["mentorship", "bootcamp"])
        );
    }

    #[test]
    fn schedule_preference_is_optional() {
        assert_eq!(SchedulePreference::parse_optional("s", None), Ok(None));
        assert_eq!(SchedulePreference::parse_optional("s", Some("")), Ok(None));
        assert_eq!(
            SchedulePreference::parse_optional("s", Some("evenings")),
            Ok(Some(SchedulePreference::Evenings))
        );
        assert!(SchedulePreference::parse_optional("s", Some("mornings")).is_err());
    }

    #[test]
    fn wire_values_match_serde() {
        for program in ProgramType::ALL {
            assert_eq!(
                serde_json::to_string(&program).unwrap(),
                format!("\"{}\"", program.as_str())
            );
        }
        for level in ExperienceLevel::ALL {
            assert_eq!(
                serde_json::to_string(&level).unwrap(),
                format!("\"{}\"", level.as_str())
            );
        }
    }
}
