//! Handler for health check endpoint.

use axum::{http::header, response::IntoResponse};

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /api/healthz`
///
/// Responds `200 OK` with the plain text body `OK`.
pub async fn health_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}
