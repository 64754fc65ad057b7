//! Admin HTTP endpoints: login, stats, registration review, CSV export.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::EXPORT_FILENAME;
pub use routes::admin_routes;
