//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are separate from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Admin handlers
    AdminLoginCommand, AdminLoginHandler, GetDashboardStatsHandler,
    // Outreach handlers
    SubmitContactMessageCommand, SubmitContactMessageHandler,
    SubscribeNewsletterCommand, SubscribeNewsletterHandler,
    // Registration handlers
    ExportRegistrationsHandler, ExportRegistrationsQuery, ExportRegistrationsResult,
    ListRegistrationsHandler, SubmitRegistrationCommand, SubmitRegistrationHandler,
    UpdateRegistrationStatusCommand, UpdateRegistrationStatusHandler,
};
