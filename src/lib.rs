//! CloudsDew - Enrollment backend
//!
//! Accepts registrations for the mentorship and bootcamp programs, contact
//! messages, and newsletter sign-ups, and gives a single administrator a
//! review workflow over the registrations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
