//! HTTP server initialization and runtime setup.
//!
//! Acts as the composition root: builds the shared hit counter and the
//! services around it, then runs the Axum server until shutdown.

use crate::application::services::ChirpValidator;
use crate::config::Config;
use crate::domain::{HitCounter, ProfanityFilter};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// The returned state owns the only [`HitCounter`] for the process.
pub fn build_state(config: &Config) -> AppState {
    let filter = ProfanityFilter::new(&config.banned_words);
    let validator = ChirpValidator::new(config.max_chirp_length, filter);

    AppState::new(Arc::new(HitCounter::new()), validator)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Hit counter, chirp validator, and admin reporter
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
