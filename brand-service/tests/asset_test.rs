mod common;

use axum::http::StatusCode;
use common::TestApp;
use service_core::genai::mock::MockImageProvider;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[tokio::test]
async fn single_asset_is_generated_with_context() {
    let app = TestApp::spawn();
    let id = app.project_with_strategy().await;

    let (status, asset) = app
        .post(&format!(
            "/api/projects/{}/assets/business_card?context=sales%20team",
            id
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(asset["project_id"], id);
    assert_eq!(asset["asset_type"], "business_card");
    assert_eq!(asset["metadata"]["context"], "sales team");
    assert_eq!(asset["metadata"]["mime_type"], "image/png");

    let url = asset["asset_url"].as_str().unwrap();
    assert!(url.starts_with(DATA_URL_PREFIX));
    assert!(url.len() > DATA_URL_PREFIX.len());

    let prompt = &app.images.prompts()[0];
    assert!(prompt.contains("TechFlow Solutions"));
    assert!(prompt.contains("#0B3D91"));
    assert!(prompt.contains("Context: sales team"));
}

#[tokio::test]
async fn generated_asset_appears_on_project() {
    let app = TestApp::spawn();
    let id = app.project_with_strategy().await;

    let (_, asset) = app.post(&format!("/api/projects/{}/assets/logo", id)).await;
    let (_, project) = app.get(&format!("/api/projects/{}", id)).await;

    assert_eq!(project["status"], "assets_partial");
    let assets = project["generated_assets"].as_array().unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0]["id"], asset["id"]);
}

#[tokio::test]
async fn asset_without_strategy_is_400() {
    let app = TestApp::spawn();
    let id = app.create_project().await;

    let (status, body) = app.post(&format!("/api/projects/{}/assets/logo", id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("strategy"));
    assert_eq!(app.images.call_count(), 0);
}

#[tokio::test]
async fn unknown_asset_type_is_400() {
    let app = TestApp::spawn();
    let id = app.project_with_strategy().await;

    let (status, body) = app.post(&format!("/api/projects/{}/assets/poster", id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("poster"));
}

#[tokio::test]
async fn image_failure_is_502_not_a_placeholder() {
    let app = TestApp::with_images(MockImageProvider::always_failing());
    let id = app.project_with_strategy().await;

    let (status, body) = app.post(&format!("/api/projects/{}/assets/logo", id)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("logo"));
    assert_eq!(app.store.asset_count().await, 0);

    let (_, project) = app.get(&format!("/api/projects/{}", id)).await;
    assert_eq!(project["status"], "strategy_ready");
}
