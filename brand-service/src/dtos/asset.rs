use crate::models::{AssetMetadata, AssetType, GeneratedAsset, ProjectStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct AssetQuery {
    /// Free-text hint folded into the image prompt.
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetResponse {
    pub id: String,
    pub project_id: String,
    pub asset_type: AssetType,
    pub asset_url: String,
    pub metadata: AssetMetadata,
    pub created_at: String,
}

impl From<GeneratedAsset> for AssetResponse {
    fn from(asset: GeneratedAsset) -> Self {
        Self {
            id: asset.id,
            project_id: asset.project_id,
            asset_type: asset.asset_type,
            asset_url: asset.asset_url,
            metadata: asset.metadata,
            created_at: asset.created_at.to_rfc3339(),
        }
    }
}

/// An asset the package run skipped, with the provider's reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailedAsset {
    pub asset_type: AssetType,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PackageResponse {
    pub project_id: String,
    pub generated_assets: Vec<AssetResponse>,
    pub total_assets: usize,
    pub status: ProjectStatus,
    pub failed_assets: Vec<FailedAsset>,
}
