//! Review module - what the administrator sees and does on the dashboard.
//!
//! - `stats` - dashboard counters
//! - `filter` - search and facet filtering
//! - `csv` - CSV rendering of registrations
//! - `board` - per-session review state with optimistic updates

mod board;
mod csv;
mod filter;
mod stats;

pub use board::ReviewBoard;
pub use csv::{export_csv, CSV_COLUMNS};
pub use filter::{RegistrationFilter, ALL_CHOICE};
pub use stats::DashboardStats;
