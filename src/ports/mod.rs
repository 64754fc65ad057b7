//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `RegistrationRepository` - Registrations, status updates, and counts
//! - `ContactMessageRepository` - Contact messages and unread counts
//! - `NewsletterRepository` - Newsletter upserts keyed by email
//!
//! ## Auth Ports
//!
//! - `AdminAuthenticator` - Admin login and bearer token validation

mod admin_authenticator;
mod contact_message_repository;
mod newsletter_repository;
mod registration_repository;

pub use admin_authenticator::AdminAuthenticator;
pub use contact_message_repository::ContactMessageRepository;
pub use newsletter_repository::NewsletterRepository;
pub use registration_repository::RegistrationRepository;
