//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AdminReporter, ChirpValidator};
use crate::domain::HitCounter;

/// State shared by every request.
///
/// Built once by the composition root ([`crate::server::run`]). The
/// [`HitCounter`] is the only mutable piece; it is shared with the
/// [`AdminReporter`] and with the hit-count middleware.
#[derive(Clone)]
pub struct AppState {
    pub hit_counter: Arc<HitCounter>,
    pub chirp_validator: Arc<ChirpValidator>,
    pub admin_reporter: Arc<AdminReporter>,
}

impl AppState {
    /// Wires the services around a single shared counter.
    pub fn new(hit_counter: Arc<HitCounter>, chirp_validator: ChirpValidator) -> Self {
        let admin_reporter = Arc::new(AdminReporter::new(hit_counter.clone()));

        Self {
            hit_counter,
            chirp_validator: Arc::new(chirp_validator),
            admin_reporter,
        }
    }
}
