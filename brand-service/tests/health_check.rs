mod common;

use axum::http::StatusCode;
use brand_service::startup::Application;
use common::TestApp;

#[tokio::test]
async fn health_check_returns_ok() {
    let (status, body) = TestApp::spawn().get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "brand-service");
}

#[tokio::test]
async fn api_health_reports_healthy() {
    let (status, body) = TestApp::spawn().get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "brand-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let (status, _) = TestApp::spawn().get("/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn metrics_endpoint_is_served() {
    service_core::observability::init_metrics();
    let (status, _) = TestApp::spawn().get("/metrics").await;
    assert_eq!(status, StatusCode::OK);
}

/// Runs the full application against MongoDB over a real socket.
#[tokio::test]
#[ignore = "Requires MongoDB on localhost:27017"]
async fn mongo_backed_application_serves_health() {
    let mut config = common::test_config();
    config.store = service_core::config::StoreBackend::Mongo;
    config.mongodb.database = format!("brand_test_{}", uuid::Uuid::new_v4().simple());

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
