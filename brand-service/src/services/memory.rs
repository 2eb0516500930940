//! In-process store, selected with `STORE_BACKEND=memory`.

use crate::models::{BrandProject, GeneratedAsset, ProjectStatus};
use crate::services::store::BrandStore;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<BrandProject>>,
    assets: RwLock<Vec<GeneratedAsset>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn asset_count(&self) -> usize {
        self.assets.read().await.len()
    }
}

#[async_trait]
impl BrandStore for MemoryStore {
    async fn insert_project(&self, project: &BrandProject) -> Result<(), AppError> {
        self.projects.write().await.push(project.clone());
        Ok(())
    }

    async fn find_project(&self, id: &str) -> Result<Option<BrandProject>, AppError> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_projects(&self, limit: i64) -> Result<Vec<BrandProject>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_project(
        &self,
        project: &BrandProject,
        expected: ProjectStatus,
    ) -> Result<(), AppError> {
        let mut projects = self.projects.write().await;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(stored) if stored.status != expected => Err(AppError::Conflict(anyhow::anyhow!(
                "Project {} is now '{}', expected '{}'",
                project.id,
                stored.status,
                expected
            ))),
            Some(stored) => {
                *stored = project.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(anyhow::anyhow!(
                "Project {} not found",
                project.id
            ))),
        }
    }

    async fn insert_asset(&self, asset: &GeneratedAsset) -> Result<(), AppError> {
        self.assets.write().await.push(asset.clone());
        Ok(())
    }

    async fn list_assets(&self, project_id: &str) -> Result<Vec<GeneratedAsset>, AppError> {
        Ok(self
            .assets
            .read()
            .await
            .iter()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn assets_for_projects(
        &self,
        project_ids: &[String],
    ) -> Result<Vec<GeneratedAsset>, AppError> {
        Ok(self
            .assets
            .read()
            .await
            .iter()
            .filter(|a| project_ids.contains(&a.project_id))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) {}
}
