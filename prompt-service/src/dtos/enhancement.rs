use crate::models::EnhancementRecord;
use serde::{Deserialize, Serialize};

/// Default number of history entries returned.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Upper bound on history entries per request.
pub const MAX_HISTORY_LIMIT: i64 = 1000;

fn default_style() -> String {
    "creative".to_string()
}

#[derive(Debug, Deserialize)]
pub struct EnhancePromptRequest {
    pub original_prompt: String,
    #[serde(default = "default_style")]
    pub enhancement_style: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhancementResponse {
    pub id: String,
    pub original_prompt: String,
    pub enhanced_prompt: String,
    pub enhancement_style: String,
    pub enhancement_reasoning: String,
    pub timestamp: String,
}

impl From<EnhancementRecord> for EnhancementResponse {
    fn from(record: EnhancementRecord) -> Self {
        Self {
            id: record.id,
            original_prompt: record.original_prompt,
            enhanced_prompt: record.enhanced_prompt,
            enhancement_style: record.style,
            enhancement_reasoning: record.reasoning,
            timestamp: record.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EnhancementHistoryParams {
    pub limit: Option<i64>,
}

impl EnhancementHistoryParams {
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT)
    }
}

#[derive(Debug, Serialize)]
pub struct StyleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StyleCatalogResponse {
    pub styles: Vec<StyleInfo>,
}
