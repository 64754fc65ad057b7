//! HTTP routes for the public form endpoints.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{submit_contact_message, submit_registration, subscribe_newsletter};

/// Creates the router for unauthenticated form submissions.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // POST /api/register
        .route("/api/register", post(submit_registration))
        // POST /api/contact
        .route("/api/contact", post(submit_contact_message))
        // POST /api/newsletter
        .route("/api/newsletter", post(subscribe_newsletter))
}
