//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `admin_auth` - Admin bearer token middleware and extractor

pub mod admin_auth;

pub use admin_auth::{admin_auth_middleware, AdminAuthState, AdminRejection, RequireAdmin};
