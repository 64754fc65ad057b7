//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL repositories
//! - `memory` - In-memory repositories for tests and local development
//! - `auth` - Admin password login and session tokens
//! - `http` - REST API

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
