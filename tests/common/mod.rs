#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chirpy::application::services::ChirpValidator;
use chirpy::domain::HitCounter;
use chirpy::routes::app_router;
use chirpy::state::AppState;

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(HitCounter::new()), ChirpValidator::default())
}

/// Full application router over the bundled `static/` directory.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, STATIC_DIR)).unwrap()
}
