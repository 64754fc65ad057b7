//! Shared application state for all HTTP routes.

use std::sync::Arc;

use crate::application::{
    AdminLoginHandler, ExportRegistrationsHandler, GetDashboardStatsHandler,
    ListRegistrationsHandler, SubmitContactMessageHandler, SubmitRegistrationHandler,
    SubscribeNewsletterHandler, UpdateRegistrationStatusHandler,
};
use crate::domain::registration::TransitionPolicy;
use crate::ports::{
    AdminAuthenticator, ContactMessageRepository, NewsletterRepository, RegistrationRepository,
};

/// Ports and settings the handlers are built from.
#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<dyn RegistrationRepository>,
    pub contact_messages: Arc<dyn ContactMessageRepository>,
    pub newsletter: Arc<dyn NewsletterRepository>,
    pub authenticator: Arc<dyn AdminAuthenticator>,
    pub transition_policy: TransitionPolicy,
}

impl AppState {
    pub fn submit_registration_handler(&self) -> SubmitRegistrationHandler {
        SubmitRegistrationHandler::new(self.registrations.clone())
    }

    pub fn submit_contact_message_handler(&self) -> SubmitContactMessageHandler {
        SubmitContactMessageHandler::new(self.contact_messages.clone())
    }

    pub fn subscribe_newsletter_handler(&self) -> SubscribeNewsletterHandler {
        SubscribeNewsletterHandler::new(self.newsletter.clone())
    }

    pub fn admin_login_handler(&self) -> AdminLoginHandler {
        AdminLoginHandler::new(self.authenticator.clone())
    }

    pub fn dashboard_stats_handler(&self) -> GetDashboardStatsHandler {
        GetDashboardStatsHandler::new(self.registrations.clone(), self.contact_messages.clone())
    }

    pub fn list_registrations_handler(&self) -> ListRegistrationsHandler {
        ListRegistrationsHandler::new(self.registrations.clone())
    }

    pub fn update_status_handler(&self) -> UpdateRegistrationStatusHandler {
        UpdateRegistrationStatusHandler::new(self.registrations.clone(), self.transition_policy)
    }

    pub fn export_registrations_handler(&self) -> ExportRegistrationsHandler {
        ExportRegistrationsHandler::new(self.registrations.clone())
    }
}
