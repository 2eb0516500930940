//! Application startup and lifecycle management.

use crate::config::BrandConfig;
use crate::handlers;
use crate::services::{
    AssetGenerator, BrandDb, BrandStore, MemoryStore, PackageGenerator, StrategyGenerator,
};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::config::StoreBackend;
use service_core::error::AppError;
use service_core::genai::gemini::{GeminiConfig, GeminiImageProvider, GeminiTextProvider};
use service_core::genai::{ImageProvider, TextProvider};
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
    pub config: BrandConfig,
    pub store: Arc<dyn BrandStore>,
    pub strategies: StrategyGenerator,
    pub assets: AssetGenerator,
    pub packages: PackageGenerator,
}

impl AppState {
    pub fn new(
        config: BrandConfig,
        store: Arc<dyn BrandStore>,
        text_provider: Arc<dyn TextProvider>,
        image_provider: Arc<dyn ImageProvider>,
    ) -> Self {
        let assets = AssetGenerator::new(image_provider);

        Self {
            config,
            strategies: StrategyGenerator::new(text_provider),
            packages: PackageGenerator::new(assets.clone(), store.clone()),
            assets,
            store,
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
        .route("/api/health", get(handlers::api_health))
        .route(
            "/api/projects",
            post(handlers::create_project).get(handlers::list_projects),
        )
        .route("/api/projects/:project_id", get(handlers::get_project))
        .route(
            "/api/projects/:project_id/strategy",
            post(handlers::generate_strategy),
        )
        .route(
            "/api/projects/:project_id/assets/:asset_type",
            post(handlers::generate_asset),
        )
        .route(
            "/api/projects/:project_id/complete-package",
            post(handlers::generate_complete_package),
        )
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

/// Construct the store selected by configuration.
async fn build_store(config: &BrandConfig) -> Result<Arc<dyn BrandStore>, AppError> {
    match config.store {
        StoreBackend::Mongo => {
            let db = BrandDb::connect(&config.mongodb.uri, &config.mongodb.database).await?;
            db.initialize_indexes().await.map_err(|e| {
                tracing::error!("Failed to initialize database indexes: {}", e);
                e
            })?;
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; projects are lost on restart");
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
    pub async fn build(config: BrandConfig) -> Result<Self, AppError> {
        let store = build_store(&config).await?;

        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(
            GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.models.text_model.clone(),
            },
        )?);
        let image_provider: Arc<dyn ImageProvider> = Arc::new(GeminiImageProvider::new(
            GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.models.image_model.clone(),
            },
        )?);

        tracing::info!(
            text_model = %config.models.text_model,
            image_model = %config.models.image_model,
            "Initialized Gemini providers"
        );

        Self::with_state(AppState::new(config, store, text_provider, image_provider)).await
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

        tracing::info!("Brand service listening on {}", port);

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
