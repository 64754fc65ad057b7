//! Newsletter subscriptions.

use crate::domain::foundation::{
    EmailAddress, MistypedFields, SubscriptionId, Timestamp, ValidationErrors,
};

/// Untrusted newsletter signup payload.
#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    pub email: Option<String>,
    pub mistyped: MistypedFields,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<EmailAddress, ValidationErrors> {
        self.mistyped
            .check("email", || {
                EmailAddress::parse("email", self.email.as_deref().unwrap_or_default())
            })
            .map_err(ValidationErrors::single)
    }
}

/// One row per email. Subscribing again reactivates instead of duplicating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub id: SubscriptionId,
    pub email: EmailAddress,
    pub is_active: bool,
    pub subscribed_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewsletterSubscription {
    /// A fresh active subscription.
    pub fn subscribe(id: SubscriptionId, email: EmailAddress, now: Timestamp) -> Self {
        Self {
            id,
            email,
            is_active: true,
            subscribed_at: now,
            updated_at: now,
        }
    }

    /// Marks an existing subscription active again.
    pub fn reactivate(&mut self, now: Timestamp) {
        self.is_active = true;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_email() {
        let form = NewsletterForm {
            email: Some("  reader@example.com ".into()),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().as_str(), "reader@example.com");
    }

    #[test]
    fn missing_email_is_rejected() {
        let errors = NewsletterForm::default().validate().unwrap_err();
        assert!(errors.has_field("email"));
    }

    #[test]
    fn non_text_email_is_a_format_error() {
        let mut form = NewsletterForm::default();
        form.mistyped.mark("email");
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn reactivate_keeps_subscribed_at() {
        let t0 = Timestamp::from_unix_secs(1_000).unwrap();
        let email = EmailAddress::parse("email", "reader@example.com").unwrap();
        let mut sub = NewsletterSubscription::subscribe(SubscriptionId::new(), email, t0);
        sub.is_active = false;

        sub.reactivate(t0.plus_secs(10));

        assert!(sub.is_active);
        assert_eq!(sub.subscribed_at, t0);
        assert_eq!(sub.updated_at, t0.plus_secs(10));
    }
}
