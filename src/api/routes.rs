//! API and admin route configuration.

use crate::api::handlers::{
    health_handler, metrics_handler, reset_handler, validate_chirp_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /healthz`        - Liveness check
/// - `POST /validate_chirp` - Validate and sanitize a chirp
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/validate_chirp", post(validate_chirp_handler))
}

/// Admin routes, nested under `/admin`.
///
/// # Endpoints
///
/// - `GET  /metrics` - HTML page with the current hit count
/// - `POST /reset`   - Reset the hit count to zero
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/reset", post(reset_handler))
}
