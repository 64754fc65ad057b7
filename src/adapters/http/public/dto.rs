//! HTTP DTOs for the public form endpoints.
//!
//! Requests use the camelCase keys the marketing site sends; stored records
//! are returned with their snake_case column names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{
    ContactMessageId, MistypedFields, RegistrationId, SubscriptionId, Timestamp,
};
use crate::domain::outreach::{
    ContactForm, ContactMessage, NewsletterForm, NewsletterSubscription,
};
use crate::domain::registration::{
    ExperienceLevel, ProgramType, Registration, RegistrationForm, RegistrationStatus,
    SchedulePreference,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Raw JSON field. Anything but a string or null is recorded as mistyped
/// so validation can report it alongside the other field errors.
type RawField = Option<Value>;

fn text(raw: RawField, field: &str, mistyped: &mut MistypedFields) -> Option<String> {
    match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            mistyped.mark(field);
            None
        }
    }
}

/// Registration form as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: RawField,
    pub last_name: RawField,
    pub email: RawField,
    pub phone: RawField,
    pub current_role: RawField,
    pub experience_level: RawField,
    pub program_type: RawField,
    pub areas_of_interest: RawField,
    pub schedule_preference: RawField,
    pub goals_expectations: RawField,
    /// Kept raw so that `"true"` or `1` fail validation instead of parsing.
    pub terms_accepted: RawField,
    /// Accepted in any shape and ignored.
    pub status: RawField,
}

impl From<RegistrationRequest> for RegistrationForm {
    fn from(req: RegistrationRequest) -> Self {
        let mut m = MistypedFields::default();
        RegistrationForm {
            first_name: text(req.first_name, "first_name", &mut m),
            last_name: text(req.last_name, "last_name", &mut m),
            email: text(req.email, "email", &mut m),
            phone: text(req.phone, "phone", &mut m),
            current_role: text(req.current_role, "current_role", &mut m),
            experience_level: text(req.experience_level, "experience_level", &mut m),
            program_type: text(req.program_type, "program_type", &mut m),
            areas_of_interest: text(req.areas_of_interest, "areas_of_interest", &mut m),
            schedule_preference: text(req.schedule_preference, "schedule_preference", &mut m),
            goals_expectations: text(req.goals_expectations, "goals_expectations", &mut m),
            terms_accepted: req.terms_accepted.and_then(|v| v.as_bool()),
            status: req.status.and_then(|v| v.as_str().map(str::to_owned)),
            mistyped: m,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: RawField,
    pub email: RawField,
    pub phone: RawField,
    pub subject: RawField,
    pub message: RawField,
}

impl From<ContactRequest> for ContactForm {
    fn from(req: ContactRequest) -> Self {
        let mut m = MistypedFields::default();
        ContactForm {
            name: text(req.name, "name", &mut m),
            email: text(req.email, "email", &mut m),
            phone: text(req.phone, "phone", &mut m),
            subject: text(req.subject, "subject", &mut m),
            message: text(req.message, "message", &mut m),
            mistyped: m,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterRequest {
    pub email: RawField,
}

impl From<NewsletterRequest> for NewsletterForm {
    fn from(req: NewsletterRequest) -> Self {
        let mut mistyped = MistypedFields::default();
        let email = text(req.email, "email", &mut mistyped);
        NewsletterForm { email, mistyped }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Confirmation envelope for public submissions.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> SubmissionResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// A stored registration as returned to the site and the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationView {
    pub id: RegistrationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_role_title: Option<String>,
    pub experience_level: ExperienceLevel,
    pub program_type: ProgramType,
    pub areas_of_interest: Option<String>,
    pub schedule_preference: Option<SchedulePreference>,
    pub goals_expectations: Option<String>,
    pub terms_accepted: bool,
    pub status: RegistrationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Registration> for RegistrationView {
    fn from(r: &Registration) -> Self {
        Self {
            id: *r.id(),
            first_name: r.first_name().to_string(),
            last_name: r.last_name().to_string(),
            email: r.email().to_string(),
            phone: r.phone().to_string(),
            current_role_title: r.current_role_title().map(str::to_string),
            experience_level: r.experience_level(),
            program_type: r.program_type(),
            areas_of_interest: r.areas_of_interest().map(str::to_string),
            schedule_preference: r.schedule_preference(),
            goals_expectations: r.goals_expectations().map(str::to_string),
            terms_accepted: r.terms_accepted(),
            status: r.status(),
            created_at: *r.created_at(),
            updated_at: *r.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageView {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

impl From<&ContactMessage> for ContactMessageView {
    fn from(m: &ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            email: m.email.to_string(),
            phone: m.phone.clone(),
            subject: m.subject.clone(),
            message: m.message.clone(),
            is_read: m.is_read,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterSubscriptionView {
    pub id: SubscriptionId,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&NewsletterSubscription> for NewsletterSubscriptionView {
    fn from(s: &NewsletterSubscription) -> Self {
        Self {
            id: s.id,
            email: s.email.to_string(),
            is_active: s.is_active,
            subscribed_at: s.subscribed_at,
            updated_at: s.updated_at,
        }
    }
}
