//! Public HTTP endpoints: registration, contact, and newsletter forms.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::{CONTACT_SUCCESS, NEWSLETTER_SUCCESS, REGISTRATION_SUCCESS};
pub use routes::public_routes;
