//! Admin view of the hit counter.

use std::sync::Arc;

use askama::Template;

use crate::domain::HitCounter;
use crate::error::AppError;

/// Confirmation returned after the counter is reset.
pub const RESET_CONFIRMATION: &str = "Reset successful";

/// Template for the admin metrics page.
///
/// Renders `templates/admin_metrics.html` with the current hit count.
#[derive(Template)]
#[template(path = "admin_metrics.html")]
struct AdminMetricsTemplate {
    hits: u32,
}

/// Reports and resets the shared [`HitCounter`].
pub struct AdminReporter {
    counter: Arc<HitCounter>,
}

impl AdminReporter {
    pub fn new(counter: Arc<HitCounter>) -> Self {
        Self { counter }
    }

    /// Renders the admin metrics page for the current hit count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if template rendering fails.
    pub fn report(&self) -> Result<String, AppError> {
        AdminMetricsTemplate {
            hits: self.counter.read(),
        }
        .render()
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to render admin metrics");
            AppError::internal("Something went wrong")
        })
    }

    /// Resets the counter to zero and returns [`RESET_CONFIRMATION`].
    pub fn reset_and_report(&self) -> &'static str {
        self.counter.reset();
        tracing::info!("Hit counter reset");
        RESET_CONFIRMATION
    }
}
