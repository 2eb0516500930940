use serde::Deserialize;
use service_core::config::{self as core_config, get_env, is_production, parse_origins, StoreBackend};
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct BrandConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub store: StoreBackend,
    pub mongodb: MongoConfig,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model that writes the brand strategy.
    pub text_model: String,
    /// Model that renders logos, cards and the other visual assets.
    pub image_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub allowed_origins: Vec<String>,
}

impl BrandConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = is_production();

        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY is not set; strategy and asset generation will fail");
        }

        Ok(BrandConfig {
            common: common_config,
            store: get_env("STORE_BACKEND", Some("mongo"), is_prod)?
                .parse()
                .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("brand_db"), is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some("gemini-2.0-flash-exp"), is_prod)?,
                image_model: get_env(
                    "GENAI_IMAGE_MODEL",
                    Some("gemini-2.0-flash-preview-image-generation"),
                    is_prod,
                )?,
            },
            google: GoogleConfig { api_key },
            http: HttpConfig {
                allowed_origins: parse_origins(&get_env("CORS_ORIGINS", Some("*"), is_prod)?),
            },
        })
    }
}
