//! In-memory adapters for tests and local development.

mod contact_message_repository;
mod newsletter_repository;
mod registration_repository;

pub use contact_message_repository::InMemoryContactMessageRepository;
pub use newsletter_repository::InMemoryNewsletterRepository;
pub use registration_repository::InMemoryRegistrationRepository;
