//! Persisted documents of the brand service.

pub mod asset;
pub mod project;
pub mod strategy;

pub use asset::{AssetMetadata, AssetType, GeneratedAsset, DATA_URL_PREFIX};
pub use project::{BrandProject, BusinessInput, InvalidTransition, ProjectEvent, ProjectStatus};
pub use strategy::{BrandStrategy, MessagingFramework};
