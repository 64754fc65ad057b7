//! HTTP adapter - axum routes, middleware, and the error wrapper.
//!
//! - `public` - registration, contact, and newsletter forms
//! - `admin` - login, stats, review, and CSV export
//! - `middleware` - admin bearer token gate

pub mod admin;
pub mod error;
pub mod middleware;
pub mod public;
mod router;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
