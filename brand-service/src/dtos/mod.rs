pub mod asset;
pub mod project;

pub use asset::{AssetQuery, AssetResponse, FailedAsset, PackageResponse};
pub use project::{CreateProjectRequest, ProjectListParams, ProjectResponse};
