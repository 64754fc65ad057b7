//! Outreach module - contact messages and newsletter signups.
//!
//! Both are create-only records with no lifecycle beyond insertion.

mod contact;
mod errors;
mod newsletter;

pub use contact::{
    ContactForm, ContactMessage, NewContactMessage, MAX_CONTACT_NAME_LENGTH, MAX_SUBJECT_LENGTH,
};
pub use errors::OutreachError;
pub use newsletter::{NewsletterForm, NewsletterSubscription};
