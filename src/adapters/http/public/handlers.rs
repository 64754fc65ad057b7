//! HTTP handlers for the public form endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::{
    SubmitContactMessageCommand, SubmitRegistrationCommand, SubscribeNewsletterCommand,
};

use super::dto::{
    ContactMessageView, ContactRequest, NewsletterRequest, NewsletterSubscriptionView,
    RegistrationRequest, RegistrationView, SubmissionResponse,
};

pub const REGISTRATION_SUCCESS: &str = "Registration successful! We will contact you soon.";
pub const CONTACT_SUCCESS: &str = "Message sent successfully! We will get back to you soon.";
pub const NEWSLETTER_SUCCESS: &str = "Successfully subscribed to newsletter!";

/// POST /api/register
pub async fn submit_registration(
    State(state): State<AppState>,
    body: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse<RegistrationView>>, ApiError> {
    let Json(request) = body?;
    let cmd = SubmitRegistrationCommand {
        form: request.into(),
    };

    let registration = state.submit_registration_handler().handle(cmd).await?;

    Ok(Json(SubmissionResponse::ok(
        REGISTRATION_SUCCESS,
        RegistrationView::from(&registration),
    )))
}

/// POST /api/contact
pub async fn submit_contact_message(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse<ContactMessageView>>, ApiError> {
    let Json(request) = body?;
    let cmd = SubmitContactMessageCommand {
        form: request.into(),
    };

    let message = state.submit_contact_message_handler().handle(cmd).await?;

    Ok(Json(SubmissionResponse::ok(
        CONTACT_SUCCESS,
        ContactMessageView::from(&message),
    )))
}

/// POST /api/newsletter
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    body: Result<Json<NewsletterRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse<NewsletterSubscriptionView>>, ApiError> {
    let Json(request) = body?;
    let cmd = SubscribeNewsletterCommand {
        form: request.into(),
    };

    let subscription = state.subscribe_newsletter_handler().handle(cmd).await?;

    Ok(Json(SubmissionResponse::ok(
        NEWSLETTER_SUCCESS,
        NewsletterSubscriptionView::from(&subscription),
    )))
}
