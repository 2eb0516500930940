//! In-process store, selected with `STORE_BACKEND=memory`.
//!
//! Holds everything in insertion order; contents are lost on restart.

use crate::models::{EnhancementRecord, StatusCheck};
use crate::services::store::PromptStore;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    enhancements: RwLock<Vec<EnhancementRecord>>,
    status_checks: RwLock<Vec<StatusCheck>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enhancement_count(&self) -> usize {
        self.enhancements.read().await.len()
    }
}

#[async_trait]
impl PromptStore for MemoryStore {
    async fn insert_enhancement(&self, record: &EnhancementRecord) -> Result<(), AppError> {
        self.enhancements.write().await.push(record.clone());
        Ok(())
    }

    async fn recent_enhancements(&self, limit: i64) -> Result<Vec<EnhancementRecord>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .enhancements
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks.write().await.push(check.clone());
        Ok(())
    }

    async fn status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .status_checks
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recent_enhancements_newest_first() {
        let store = MemoryStore::new();
        for prompt in ["one", "two", "three"] {
            let record = EnhancementRecord::new(
                prompt.to_string(),
                format!("{} enhanced", prompt),
                "creative".to_string(),
                "r".to_string(),
            );
            store.insert_enhancement(&record).await.unwrap();
        }

        let recent = store.recent_enhancements(2).await.unwrap();
        let prompts: Vec<&str> = recent.iter().map(|r| r.original_prompt.as_str()).collect();
        assert_eq!(prompts, vec!["three", "two"]);
    }

    #[tokio::test]
    async fn test_status_checks_keep_insertion_order() {
        let store = MemoryStore::new();
        store
            .insert_status_check(&StatusCheck::new("a".to_string()))
            .await
            .unwrap();
        store
            .insert_status_check(&StatusCheck::new("b".to_string()))
            .await
            .unwrap();

        let checks = store.status_checks(1000).await.unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].client_name, "a");
    }
}
