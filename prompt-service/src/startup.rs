//! Application startup and lifecycle management.

use crate::config::PromptConfig;
use crate::handlers;
use crate::services::{MemoryStore, PromptDb, PromptEnhancer, PromptStore};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::config::StoreBackend;
use service_core::error::AppError;
use service_core::genai::gemini::{GeminiConfig, GeminiTextProvider};
use service_core::genai::TextProvider;
use service_core::middleware::{
    cors_layer, make_request_span, metrics_middleware, request_id_middleware,
};
use service_core::observability::metrics_handler;
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: PromptConfig,
    pub store: Arc<dyn PromptStore>,
    pub enhancer: PromptEnhancer,
}

impl AppState {
    pub fn new(
        config: PromptConfig,
        store: Arc<dyn PromptStore>,
        text_provider: Arc<dyn TextProvider>,
    ) -> Self {
        Self {
            config,
            store,
            enhancer: PromptEnhancer::new(text_provider),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.http.allowed_origins);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(metrics_handler))
        .route("/api", get(handlers::root_info))
        .route("/api/", get(handlers::root_info))
        .route(
            "/api/status",
            post(handlers::create_status_check).get(handlers::list_status_checks),
        )
        .route("/api/enhance-prompt", post(handlers::enhance_prompt))
        .route("/api/enhancement-history", get(handlers::enhancement_history))
        .route("/api/enhancement-styles", get(handlers::enhancement_styles))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

/// Construct the store selected by configuration.
async fn build_store(config: &PromptConfig) -> Result<Arc<dyn PromptStore>, AppError> {
    match config.store {
        StoreBackend::Mongo => {
            let db = PromptDb::connect(&config.mongodb.uri, &config.mongodb.database)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to MongoDB: {}", e);
                    e
                })?;
            db.initialize_indexes().await.map_err(|e| {
                tracing::error!("Failed to initialize database indexes: {}", e);
                e
            })?;
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; history is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: PromptConfig) -> Result<Self, AppError> {
        let store = build_store(&config).await?;

        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(
            GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.models.text_model.clone(),
            },
        )?);

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        Self::with_state(AppState::new(config, store, text_provider)).await
    }

    /// Bind a listener for an already assembled state.
    pub async fn with_state(state: AppState) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Prompt service listening on {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives, then close the store.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let store = self.state.store.clone();
        let router = build_router(self.state);

        let result = axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        store.close().await;
        result
    }
}
