use crate::models::{BrandProject, GeneratedAsset, InvalidTransition, ProjectStatus};
use async_trait::async_trait;
use service_core::error::AppError;

/// Reload-and-apply rounds before a contended status change gives up.
const TRANSITION_ATTEMPTS: usize = 3;

/// Persistence seam for the brand service.
///
/// Assets are the single source of truth for what was generated; project
/// responses are assembled from [`BrandStore::list_assets`].
#[async_trait]
pub trait BrandStore: Send + Sync {
    async fn insert_project(&self, project: &BrandProject) -> Result<(), AppError>;

    async fn find_project(&self, id: &str) -> Result<Option<BrandProject>, AppError>;

    /// Most recently created first.
    async fn list_projects(&self, limit: i64) -> Result<Vec<BrandProject>, AppError>;

    /// Replace a stored project whose status is still `expected`.
    ///
    /// `NotFound` when it does not exist, `Conflict` when its status moved
    /// since it was read.
    async fn update_project(
        &self,
        project: &BrandProject,
        expected: ProjectStatus,
    ) -> Result<(), AppError>;

    async fn insert_asset(&self, asset: &GeneratedAsset) -> Result<(), AppError>;

    /// Assets of one project, oldest first.
    async fn list_assets(&self, project_id: &str) -> Result<Vec<GeneratedAsset>, AppError>;

    /// Assets of several projects in one round trip, oldest first.
    async fn assets_for_projects(
        &self,
        project_ids: &[String],
    ) -> Result<Vec<GeneratedAsset>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Release connections. Called once after the server stops.
    async fn close(&self);
}

/// Apply `change` to the freshly loaded project and store the result.
///
/// The write only lands if nobody changed the status in between; otherwise
/// the project is reloaded and `change` runs again on the newer state.
pub async fn transition_project<F>(
    store: &dyn BrandStore,
    project_id: &str,
    mut change: F,
) -> Result<BrandProject, AppError>
where
    F: FnMut(&mut BrandProject) -> Result<(), InvalidTransition>,
{
    for attempt in 1..=TRANSITION_ATTEMPTS {
        let mut project = store.find_project(project_id).await?.ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("Project {} not found", project_id))
        })?;
        let expected = project.status;
        change(&mut project)?;

        match store.update_project(&project, expected).await {
            Ok(()) => return Ok(project),
            Err(AppError::Conflict(e)) => {
                tracing::debug!(
                    project_id = %project_id,
                    attempt,
                    "Project status moved concurrently, retrying: {}",
                    e
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::Conflict(anyhow::anyhow!(
        "Project {} is being updated concurrently",
        project_id
    )))
}
