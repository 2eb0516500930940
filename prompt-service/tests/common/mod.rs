#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use prompt_service::config::{GoogleConfig, HttpConfig, ModelConfig, MongoConfig, PromptConfig};
use prompt_service::services::MemoryStore;
use prompt_service::startup::{build_router, AppState};
use service_core::config::{Config as CoreConfig, StoreBackend};
use service_core::genai::TextProvider;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_config() -> PromptConfig {
    PromptConfig {
        common: CoreConfig { port: 0 },
        store: StoreBackend::Memory,
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "prompt_test".to_string(),
        },
        models: ModelConfig {
            text_model: "mock-text".to_string(),
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        http: HttpConfig {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn spawn(provider: Arc<dyn TextProvider>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(test_config(), store.clone(), provider);

        TestApp {
            router: build_router(state),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, body)
    }
}
