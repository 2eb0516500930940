mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use service_core::genai::mock::MockTextProvider;
use std::sync::Arc;

const FENCED_REPLY: &str = "```json\n{\"enhanced_prompt\": \"a sunset over jagged mountains, golden hour\", \"reasoning\": \"added lighting\"}\n```";

#[tokio::test]
async fn enhance_prompt_returns_parsed_fields_and_persists() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::with_reply(FENCED_REPLY)));

    let (status, body) = app
        .post_json(
            "/api/enhance-prompt",
            json!({"original_prompt": "a sunset over mountains", "enhancement_style": "cinematic"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_prompt"], "a sunset over mountains");
    assert_eq!(
        body["enhanced_prompt"],
        "a sunset over jagged mountains, golden hour"
    );
    assert_eq!(body["enhancement_style"], "cinematic");
    assert_eq!(body["enhancement_reasoning"], "added lighting");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["timestamp"].as_str().is_some());

    assert_eq!(app.store.enhancement_count().await, 1);
}

#[tokio::test]
async fn enhance_prompt_falls_back_to_raw_text() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::with_reply(
        "Robot striding through a factory, exposure 1/250s",
    )));

    let (status, body) = app
        .post_json(
            "/api/enhance-prompt",
            json!({"original_prompt": "a robot walking", "enhancement_style": "technical"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["enhanced_prompt"],
        "Robot striding through a factory, exposure 1/250s"
    );
    assert_eq!(
        body["enhancement_reasoning"],
        "Enhanced using technical style with AI creativity"
    );
}

#[tokio::test]
async fn unknown_style_is_echoed_and_uses_creative_template() {
    let provider = Arc::new(MockTextProvider::with_reply(FENCED_REPLY));
    let app = TestApp::spawn(provider.clone());

    let (status, body) = app
        .post_json(
            "/api/enhance-prompt",
            json!({"original_prompt": "a fox", "enhancement_style": "surreal"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enhancement_style"], "surreal");
    assert_eq!(
        provider.prompts()[0],
        prompt_service::services::EnhancementStyle::Creative.render("a fox")
    );
}

#[tokio::test]
async fn empty_prompt_is_rejected_without_writing_history() {
    let provider = Arc::new(MockTextProvider::with_reply(FENCED_REPLY));
    let app = TestApp::spawn(provider.clone());

    for prompt in ["", "   \n\t "] {
        let (status, body) = app
            .post_json(
                "/api/enhance-prompt",
                json!({"original_prompt": prompt, "enhancement_style": "creative"}),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Original prompt cannot be empty");
    }

    assert_eq!(app.store.enhancement_count().await, 0);
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn missing_api_key_returns_500() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::unconfigured()));

    let (status, body) = app
        .post_json("/api/enhance-prompt", json!({"original_prompt": "a castle"}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Configuration error");
    assert_eq!(app.store.enhancement_count().await, 0);
}

#[tokio::test]
async fn provider_failure_returns_500_with_raw_text() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::failing("upstream exploded")));

    let (status, body) = app
        .post_json("/api/enhance-prompt", json!({"original_prompt": "a castle"}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("upstream exploded"));
    assert_eq!(app.store.enhancement_count().await, 0);
}

#[tokio::test]
async fn history_is_newest_first_and_limited() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::with_reply(FENCED_REPLY)));

    for prompt in ["first", "second", "third"] {
        let (status, _) = app
            .post_json("/api/enhance-prompt", json!({"original_prompt": prompt}))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app.get("/api/enhancement-history?limit=2").await;
    assert_eq!(status, StatusCode::OK);

    let history = body.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["original_prompt"], "third");
    assert_eq!(history[1]["original_prompt"], "second");

    let (_, body) = app.get("/api/enhancement-history").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn styles_catalog_lists_five_styles() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::with_reply(FENCED_REPLY)));

    let (status, body) = app.get("/api/enhancement-styles").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body["styles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["creative", "technical", "artistic", "cinematic", "detailed"]
    );
    assert_eq!(body["styles"][3]["name"], "Cinematic");
}
