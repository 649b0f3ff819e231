//! Handlers for admin metrics endpoints.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::error::AppError;
use crate::state::AppState;

/// Renders the hit count page.
///
/// # Endpoint
///
/// `GET /admin/metrics`
///
/// Responds `200 OK` with `text/html; charset=utf-8`.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.admin_reporter.report().map(Html)
}

/// Resets the hit counter to zero.
///
/// # Endpoint
///
/// `POST /admin/reset`
///
/// Always responds `200 OK` with a plain text confirmation.
pub async fn reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.admin_reporter.reset_and_report(),
    )
}
