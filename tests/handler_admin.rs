mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use chirpy::api::handlers::{metrics_handler, reset_handler};
use chirpy::state::AppState;

fn create_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/admin/metrics", get(metrics_handler))
        .route("/admin/reset", post(reset_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_metrics_reports_current_count() {
    let state = common::create_test_state();
    for _ in 0..3 {
        state.hit_counter.increment();
    }
    let server = create_server(state);

    let response = server.get("/admin/metrics").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "text/html; charset=utf-8");

    let html = response.text();
    assert!(html.contains("Welcome, Chirpy Admin"));
    assert!(html.contains("Chirpy has been visited 3 times!"));
}

#[tokio::test]
async fn test_metrics_does_not_count_itself() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    server.get("/app/index.html").await.assert_status_ok();
    server.get("/admin/metrics").await.assert_status_ok();
    let response = server.get("/admin/metrics").await;

    assert!(response.text().contains("visited 1 times!"));
    assert_eq!(state.hit_counter.read(), 1);
}

#[tokio::test]
async fn test_reset_sets_counter_to_zero() {
    let state = common::create_test_state();
    for _ in 0..42 {
        state.hit_counter.increment();
    }
    let server = create_server(state.clone());

    let response = server.post("/admin/reset").await;

    response.assert_status_ok();
    response.assert_text("Reset successful");
    assert_eq!(
        response.header("content-type"),
        "text/plain; charset=utf-8"
    );
    assert_eq!(state.hit_counter.read(), 0);

    let response = server.get("/admin/metrics").await;
    assert!(response.text().contains("visited 0 times!"));
}

#[tokio::test]
async fn test_reset_when_already_zero() {
    let state = common::create_test_state();
    let server = create_server(state.clone());

    server.post("/admin/reset").await.assert_status_ok();
    assert_eq!(state.hit_counter.read(), 0);
}
