//! HTTP routes for the admin endpoints.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::middleware::admin_auth_middleware;
use crate::adapters::http::state::AppState;

use super::handlers::{
    export_registrations, get_stats, list_registrations, login, update_registration_status,
};

/// Creates the admin router.
///
/// Login is open; every other route passes through `admin_auth_middleware`
/// and requires a valid session.
pub fn admin_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        // GET /api/admin/stats
        .route("/api/admin/stats", get(get_stats))
        // GET, PUT /api/admin/registrations
        .route(
            "/api/admin/registrations",
            get(list_registrations).put(update_registration_status),
        )
        // GET /api/admin/registrations/export
        .route("/api/admin/registrations/export", get(export_registrations))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        // POST /api/admin/login
        .route("/api/admin/login", post(login))
        .merge(protected)
}
