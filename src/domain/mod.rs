//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `registration` - Program registrations and their review status
//! - `outreach` - Contact messages and newsletter subscriptions
//! - `review` - Admin dashboard stats, filtering, and CSV export

pub mod foundation;
pub mod outreach;
pub mod registration;
pub mod review;
