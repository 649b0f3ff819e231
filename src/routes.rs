//! Top-level router configuration combining API, admin, and static routes.
//!
//! # Route Structure
//!
//! - `/app/*`     - Static files, counted by the hit-count middleware
//! - `/api/*`     - Health check and chirp validation
//! - `/admin/*`   - Hit count report and reset
//!
//! # Middleware
//!
//! - **Hit counting** - Only on `/app`; other routes are never counted
//! - **Nest redirects** - Keeps `/app` in `ServeDir` directory redirects
//! - **Path normalization** - Trailing slash trimming for `/api` and `/admin`.
//!   `/app` is left alone so `ServeDir` can tell directories from files.
//! - **Tracing** - Structured request/response logging

use std::path::Path;

use crate::api;
use crate::api::middleware::{HitCountLayer, nest_redirect, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;

/// Constructs the application router served by [`crate::server::run`].
///
/// The hit-count layer is created here, once, from the counter held in
/// `state`. API and admin routes sit behind the fallback so trailing-slash
/// normalization never touches static paths.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let hits = HitCountLayer::new(state.hit_counter.clone());
    let static_files =
        middleware::from_fn(nest_redirect::layer).layer(hits.layer(ServeDir::new(static_dir)));

    let api_router = Router::new()
        .nest("/api", api::routes::api_routes())
        .nest("/admin", api::routes::admin_routes())
        .with_state(state);

    Router::new()
        .nest_service("/app", static_files)
        .fallback_service(NormalizePathLayer::trim_trailing_slash().layer(api_router))
        .layer(tracing::layer())
}
