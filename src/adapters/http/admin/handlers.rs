//! HTTP handlers for the admin endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::public::dto::RegistrationView;
use crate::adapters::http::state::AppState;
use crate::application::{
    AdminLoginCommand, ExportRegistrationsQuery, UpdateRegistrationStatusCommand,
};
use crate::domain::review::DashboardStats;

use super::dto::{ExportParams, LoginRequest, LoginResponse, UpdateStatusRequest};

pub const EXPORT_FILENAME: &str = "registrations.csv";

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = body?;
    let token = state
        .admin_login_handler()
        .handle(AdminLoginCommand {
            password: request.password,
        })
        .await?;

    Ok(Json(token.into()))
}

/// GET /api/admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    RequireAdmin(_session): RequireAdmin,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = state.dashboard_stats_handler().handle().await?;
    Ok(Json(stats))
}

/// GET /api/admin/registrations
///
/// Every registration, newest first.
pub async fn list_registrations(
    State(state): State<AppState>,
    RequireAdmin(_session): RequireAdmin,
) -> Result<Json<Vec<RegistrationView>>, ApiError> {
    let registrations = state.list_registrations_handler().handle().await?;
    Ok(Json(registrations.iter().map(RegistrationView::from).collect()))
}

/// PUT /api/admin/registrations
pub async fn update_registration_status(
    State(state): State<AppState>,
    RequireAdmin(session): RequireAdmin,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<RegistrationView>, ApiError> {
    let Json(request) = body?;
    let (id, status) = request.parse()?;

    let updated = state
        .update_status_handler()
        .handle(UpdateRegistrationStatusCommand { id, status })
        .await?;

    tracing::debug!(session_id = %session.session_id, registration_id = %id, "Status changed by admin");
    Ok(Json(RegistrationView::from(&updated)))
}

/// GET /api/admin/registrations/export?search=&status=&program=
///
/// CSV attachment of the registrations matching the filter.
pub async fn export_registrations(
    State(state): State<AppState>,
    RequireAdmin(_session): RequireAdmin,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let filter = params.to_filter()?;
    let result = state
        .export_registrations_handler()
        .handle(ExportRegistrationsQuery { filter })
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        result.csv,
    )
        .into_response())
}
