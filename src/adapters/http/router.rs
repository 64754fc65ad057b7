//! Top-level router: public and admin routes plus the shared middleware stack.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::admin::admin_routes;
use super::public::public_routes;
use super::state::AppState;

/// Builds the complete application router.
///
/// Layers apply outermost first: tracing, then timeout, then CORS.
pub fn app_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(admin_routes(&state))
        .with_state(state)
        .layer(cors_layer(&config.cors_origins_list()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins. No origins (or `*`) means any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(allowed)
}
