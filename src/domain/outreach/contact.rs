//! Contact messages sent through the public contact form.

use crate::domain::foundation::{
    optional_text, required_text, ContactMessageId, EmailAddress, MistypedFields, Timestamp,
    ValidationError, ValidationErrors,
};
use crate::domain::registration::{collect, MAX_PHONE_LENGTH};

pub const MAX_CONTACT_NAME_LENGTH: usize = 200;
pub const MAX_SUBJECT_LENGTH: usize = 300;

/// Untrusted contact form payload.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    /// Fields that arrived with a non-text value.
    pub mistyped: MistypedFields,
}

/// A contact payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Validates the form, reporting every violated field.
    pub fn validate(&self) -> Result<NewContactMessage, ValidationErrors> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let m = &self.mistyped;

        let name = collect(
            &mut errors,
            m.check("name", || {
                required_text("name", self.name.as_deref(), Some(MAX_CONTACT_NAME_LENGTH))
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
                optional_text("phone", self.phone.as_deref(), Some(MAX_PHONE_LENGTH))
            }),
        );
        let subject = collect(
            &mut errors,
            m.check("subject", || {
                optional_text("subject", self.subject.as_deref(), Some(MAX_SUBJECT_LENGTH))
            }),
        );
        let message = collect(
            &mut errors,
            m.check("message", || required_text("message", self.message.as_deref(), None)),
        );

        ValidationErrors::check(errors)?;

        match (name, email, phone, subject, message) {
            (Some(name), Some(email), Some(phone), Some(subject), Some(message)) => {
                Ok(NewContactMessage {
                    name,
                    email,
                    phone,
                    subject,
                    message,
                })
            }
            _ => Err(ValidationErrors::single(ValidationError::empty_field("form"))),
        }
    }
}

/// A stored contact message. Created once, never edited here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

impl ContactMessage {
    /// Creates an unread message.
    pub fn receive(id: ContactMessageId, new: NewContactMessage, now: Timestamp) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            is_read: false,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: Some("Grace Hopper".into()),
            email: Some("grace@example.com".into()),
            message: Some("When does the next cohort start?".into()),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_form_is_valid() {
        let new = form().validate().unwrap();
        assert_eq!(new.name, "Grace Hopper");
        assert_eq!(new.phone, None);
        assert_eq!(new.subject, None);
    }

    #[test]
    fn empty_optionals_are_absent() {
        let mut f = form();
        f.phone = Some(String::new());
        f.subject = Some("  ".into());
        let new = f.validate().unwrap();
        assert_eq!(new.phone, None);
        assert_eq!(new.subject, None);
    }

    #[test]
    fn missing_message_and_bad_email_are_both_reported() {
        let mut f = form();
        f.message = None;
        f.email = Some("grace".into());
        let errors = f.validate().unwrap_err();
        assert!(errors.has_field("message"));
        assert!(errors.has_field("email"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn subject_and_name_limits_apply() {
        let mut f = form();
        f.name = Some("n".repeat(MAX_CONTACT_NAME_LENGTH + 1));
        f.subject = Some("s".repeat(MAX_SUBJECT_LENGTH + 1));
        let errors = f.validate().unwrap_err();
        assert!(errors.has_field("name"));
        assert!(errors.has_field("subject"));
    }

    #[test]
    fn mistyped_subject_is_a_format_error() {
        let mut f = form();
        f.mistyped.mark("subject");
        let errors = f.validate().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ValidationError::invalid_format("subject", "must be text")]
        );
    }

    #[test]
    fn message_has_no_upper_bound() {
        let mut f = form();
        f.message = Some("m".repeat(50_000));
        assert!(f.validate().is_ok());
    }

    #[test]
    fn received_message_is_unread() {
        let msg = ContactMessage::receive(
            ContactMessageId::new(),
            form().validate().unwrap(),
            Timestamp::now(),
        );
        assert!(!msg.is_read);
    }
}
