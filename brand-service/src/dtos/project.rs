use crate::dtos::AssetResponse;
use crate::models::{BrandProject, BrandStrategy, BusinessInput, GeneratedAsset, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Default number of projects returned by the list endpoint.
pub const DEFAULT_PROJECT_LIMIT: i64 = 100;

/// Upper bound on projects per list request.
pub const MAX_PROJECT_LIMIT: i64 = 1000;

/// Request body of `POST /api/projects`.
pub type CreateProjectRequest = BusinessInput;

#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub limit: Option<i64>,
}

impl ProjectListParams {
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PROJECT_LIMIT)
            .clamp(1, MAX_PROJECT_LIMIT)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub business_input: BusinessInput,
    pub brand_strategy: Option<BrandStrategy>,
    pub generated_assets: Vec<AssetResponse>,
    pub status: ProjectStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl ProjectResponse {
    /// Combine a project with its assets, oldest asset first.
    pub fn assemble(project: BrandProject, mut assets: Vec<GeneratedAsset>) -> Self {
        assets.sort_by_key(|a| a.created_at);

        Self {
            id: project.id,
            business_input: project.business_input,
            brand_strategy: project.brand_strategy,
            generated_assets: assets.into_iter().map(AssetResponse::from).collect(),
            status: project.status,
            created_at: project.created_at.to_rfc3339(),
            updated_at: project.updated_at.to_rfc3339(),
        }
    }
}
