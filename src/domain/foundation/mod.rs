//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the enrollment domain.

mod auth;
mod email;
mod errors;
mod ids;
mod state_machine;
mod text;
mod timestamp;

pub use auth::{AdminSession, AdminToken, AuthError};
pub use email::{EmailAddress, MAX_EMAIL_LENGTH};
pub use errors::{DomainError, ErrorCode, ValidationError, ValidationErrors};
pub use ids::{ContactMessageId, RegistrationId, SubscriptionId};
pub use state_machine::TransitionTable;
pub use text::{optional_text, required_text, MistypedFields};
pub use timestamp::Timestamp;
