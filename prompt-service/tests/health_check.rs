mod common;

use axum::http::StatusCode;
use common::TestApp;
use prompt_service::startup::Application;
use service_core::genai::mock::MockTextProvider;
use std::sync::Arc;

fn app() -> TestApp {
    TestApp::spawn(Arc::new(MockTextProvider::with_reply("{}")))
}

#[tokio::test]
async fn health_check_returns_ok() {
    let (status, body) = app().get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "prompt-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let (status, _) = app().get("/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_root_returns_message() {
    let (status, body) = app().get("/api/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn request_id_is_echoed() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    let response = app()
        .router
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

/// Runs the full application against MongoDB over a real socket.
#[tokio::test]
#[ignore = "Requires MongoDB on localhost:27017"]
async fn mongo_backed_application_serves_health() {
    let mut config = common::test_config();
    config.store = service_core::config::StoreBackend::Mongo;
    config.mongodb.database = format!("prompt_test_{}", uuid::Uuid::new_v4());

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let response = reqwest::Client::new()
        .get(format!("http://127.0.0.1:{}/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
