use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One enhancement call. Written once, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhancementRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub original_prompt: String,
    pub enhanced_prompt: String,
    /// Style as requested by the caller, even when it fell back to creative.
    pub style: String,
    pub reasoning: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl EnhancementRecord {
    pub fn new(
        original_prompt: String,
        enhanced_prompt: String,
        style: String,
        reasoning: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            original_prompt,
            enhanced_prompt,
            style,
            reasoning,
            timestamp: Utc::now(),
        }
    }
}
