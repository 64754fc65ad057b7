//! Admin command and query handlers.

mod admin_login;
mod get_dashboard_stats;

pub use admin_login::{AdminLoginCommand, AdminLoginHandler};
pub use get_dashboard_stats::GetDashboardStatsHandler;
