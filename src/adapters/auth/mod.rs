//! Authentication adapters.
//!
//! Implementations of the `AdminAuthenticator` port:
//!
//! - `jwt_admin` - Shared admin password with HS256 session tokens

mod jwt_admin;

pub use jwt_admin::JwtAdminAuthenticator;
