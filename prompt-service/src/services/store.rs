use crate::models::{EnhancementRecord, StatusCheck};
use async_trait::async_trait;
use service_core::error::AppError;

/// Persistence seam for the prompt service.
#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn insert_enhancement(&self, record: &EnhancementRecord) -> Result<(), AppError>;

    /// Most recent first.
    async fn recent_enhancements(&self, limit: i64) -> Result<Vec<EnhancementRecord>, AppError>;

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError>;

    /// Oldest first.
    async fn status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Release connections. Called once after the server stops.
    async fn close(&self);
}
