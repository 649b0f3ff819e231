mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chirpy::routes::app_router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_static_files_are_served_and_counted() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server.get("/app/index.html").await;

    response.assert_status_ok();
    assert!(response.text().contains("Welcome to Chirpy"));
    assert_eq!(state.hit_counter.read(), 1);
}

#[tokio::test]
async fn test_missing_static_file_is_still_counted() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    server
        .get("/app/does-not-exist.txt")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(state.hit_counter.read(), 1);
}

#[tokio::test]
async fn test_end_to_end_metrics_flow() {
    let state = common::create_test_state();
    let server = common::create_test_server(state);

    for _ in 0..3 {
        server.get("/app/index.html").await.assert_status_ok();
    }
    server.get("/api/healthz").await.assert_status_ok();
    server
        .post("/api/validate_chirp")
        .json(&json!({ "body": "fornax" }))
        .await
        .assert_status_ok();

    let metrics = server.get("/admin/metrics").await;
    assert!(metrics.text().contains("Chirpy has been visited 3 times!"));

    server.post("/admin/reset").await.assert_status_ok();

    let metrics = server.get("/admin/metrics").await;
    assert!(metrics.text().contains("Chirpy has been visited 0 times!"));
}

#[tokio::test]
async fn test_admin_reset_requires_post() {
    let server = common::create_test_server(common::create_test_state());

    server
        .get("/admin/reset")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_hits_are_all_counted() {
    let state = common::create_test_state();
    let app = app_router(state.clone(), common::STATIC_DIR);
    let requests = 64;

    let handles: Vec<_> = (0..requests)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::builder()
                    .uri("/app/index.html")
                    .body(Body::empty())
                    .unwrap();
                app.oneshot(request).await.unwrap().status()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    assert_eq!(state.hit_counter.read(), requests);
}

#[tokio::test]
async fn test_static_subdirectory_with_trailing_slash_serves_index() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server.get("/app/docs/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Chirpy Docs"));
    assert_eq!(state.hit_counter.read(), 1);
}

#[tokio::test]
async fn test_static_subdirectory_redirect_keeps_prefix() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/app/docs").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/app/docs/");

    let response = server.get("/app/docs?lang=en").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/app/docs/?lang=en");
}

#[tokio::test]
async fn test_api_routes_still_trim_trailing_slash() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/healthz/").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_oversized_chirp_gets_json_error() {
    let server = common::create_test_server(common::create_test_state());
    let body = "a".repeat(3 * 1024 * 1024);

    let response = server
        .post("/api/validate_chirp")
        .json(&json!({ "body": body }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Request body too large" })
    );
}
