//! Contact and newsletter command handlers.

mod submit_contact_message;
mod subscribe_newsletter;

pub use submit_contact_message::{SubmitContactMessageCommand, SubmitContactMessageHandler};
pub use subscribe_newsletter::{SubscribeNewsletterCommand, SubscribeNewsletterHandler};
