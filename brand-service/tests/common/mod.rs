#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use brand_service::config::{BrandConfig, GoogleConfig, HttpConfig, ModelConfig, MongoConfig};
use brand_service::services::MemoryStore;
use brand_service::startup::{build_router, AppState};
use serde_json::{json, Value};
use service_core::config::{Config as CoreConfig, StoreBackend};
use service_core::genai::mock::{MockImageProvider, MockTextProvider};
use service_core::genai::{ImageProvider, TextProvider};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const STRATEGY_REPLY: &str = r##"```json
{
    "brand_personality": "Confident, clear and helpful",
    "visual_direction": "Crisp geometry with generous whitespace",
    "color_palette": ["#0B3D91", "#FFFFFF", "#F2A900"],
    "typography": "Inter for headings, Source Serif for body",
    "messaging_framework": {
        "tagline": "Work flows better",
        "value_proposition": "Automation that small teams can trust",
        "key_messages": ["Save hours every week", "No code required"]
    }
}
```"##;

pub fn test_config() -> BrandConfig {
    BrandConfig {
        common: CoreConfig { port: 0 },
        store: StoreBackend::Memory,
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "brand_test".to_string(),
        },
        models: ModelConfig {
            text_model: "mock-text".to_string(),
            image_model: "mock-image".to_string(),
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        http: HttpConfig {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

pub fn business_input() -> Value {
    json!({
        "business_name": "TechFlow Solutions",
        "business_description": "AI-powered workflow automation for small businesses",
        "industry": "Technology",
        "target_audience": "Small business owners and entrepreneurs",
        "business_values": ["innovation", "efficiency", "reliability"],
        "preferred_style": "modern",
        "preferred_colors": "blue and white"
    })
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub images: Arc<MockImageProvider>,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::with_providers(
            Arc::new(MockTextProvider::with_reply(STRATEGY_REPLY)),
            MockImageProvider::new(),
        )
    }

    pub fn with_images(images: MockImageProvider) -> Self {
        Self::with_providers(Arc::new(MockTextProvider::with_reply(STRATEGY_REPLY)), images)
    }

    pub fn with_providers(text: Arc<dyn TextProvider>, images: MockImageProvider) -> Self {
        let store = Arc::new(MemoryStore::new());
        let images = Arc::new(images);
        let image_provider: Arc<dyn ImageProvider> = images.clone();
        let state = AppState::new(test_config(), store.clone(), text, image_provider);

        TestApp {
            router: build_router(state),
            store,
            images,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
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

    /// Create a project and return its id.
    pub async fn create_project(&self) -> String {
        let (status, body) = self.post_json("/api/projects", business_input()).await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }

    /// Create a project with a generated strategy and return its id.
    pub async fn project_with_strategy(&self) -> String {
        let id = self.create_project().await;
        let (status, _) = self.post(&format!("/api/projects/{}/strategy", id)).await;
        assert_eq!(status, StatusCode::OK);
        id
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}
