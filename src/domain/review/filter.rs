//! Search and facet filtering over the registration list.

use crate::domain::foundation::{ValidationError, ValidationErrors};
use crate::domain::registration::{collect, ProgramType, Registration, RegistrationStatus};

/// Value that selects every option of a facet.
pub const ALL_CHOICE: &str = "all";

/// Conjunction of a free-text search and two optional facets.
///
/// The default filter matches every registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFilter {
    pub search: String,
    pub status: Option<RegistrationStatus>,
    pub program: Option<ProgramType>,
}

impl RegistrationFilter {
    /// Builds a filter from raw query values. `all` or an empty value leaves
    /// a facet unconstrained.
    pub fn from_query(
        search: Option<&str>,
        status: Option<&str>,
        program: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let status = collect(
            &mut errors,
            match status {
                None | Some("") | Some(ALL_CHOICE) => Ok(None),
                value => RegistrationStatus::parse("status", value).map(Some),
            },
        );
        let program = collect(
            &mut errors,
            match program {
                None | Some("") | Some(ALL_CHOICE) => Ok(None),
                value => ProgramType::parse("program", value).map(Some),
            },
        );
        ValidationErrors::check(errors)?;

        Ok(Self {
            search: search.unwrap_or_default().to_string(),
            status: status.flatten(),
            program: program.flatten(),
        })
    }

    /// Returns true if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_none() && self.program.is_none()
    }

    /// Case-insensitive substring search over first name, last name, and
    /// email, combined with exact facet equality.
    pub fn matches(&self, registration: &Registration) -> bool {
        self.matches_search(registration)
            && self.status.map_or(true, |s| registration.status() == s)
            && self.program.map_or(true, |p| registration.program_type() == p)
    }

    /// Keeps the matching registrations in their original order.
    pub fn apply<'a>(&self, registrations: &'a [Registration]) -> Vec<&'a Registration> {
        registrations.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches_search(&self, registration: &Registration) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            registration.first_name(),
            registration.last_name(),
            registration.email().as_str(),
        ]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }
}
