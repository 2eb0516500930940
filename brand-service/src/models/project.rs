use crate::models::BrandStrategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// Business metadata supplied when a project is created.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BusinessInput {
    #[validate(length(min = 1, max = 200, message = "Business name cannot be empty"))]
    pub business_name: String,
    #[validate(length(min = 1, max = 4000, message = "Business description cannot be empty"))]
    pub business_description: String,
    #[validate(length(min = 1, max = 200, message = "Industry cannot be empty"))]
    pub industry: String,
    #[validate(length(min = 1, max = 1000, message = "Target audience cannot be empty"))]
    pub target_audience: String,
    #[serde(default)]
    pub business_values: Vec<String>,
    #[serde(default)]
    pub preferred_style: Option<String>,
    #[serde(default)]
    pub preferred_colors: Option<String>,
}

/// Lifecycle of a brand project.
///
/// `created -> strategy_ready -> assets_partial -> completed`. Statuses only
/// move through [`ProjectStatus::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Created,
    StrategyReady,
    AssetsPartial,
    Completed,
}

/// Something that happened to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectEvent {
    StrategyGenerated,
    AssetGenerated,
    PackageFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot apply {event:?} to a project in status '{from}'")]
pub struct InvalidTransition {
    pub from: ProjectStatus,
    pub event: ProjectEvent,
}

impl From<InvalidTransition> for AppError {
    fn from(err: InvalidTransition) -> Self {
        AppError::Conflict(anyhow::Error::new(err))
    }
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Created => "created",
            ProjectStatus::StrategyReady => "strategy_ready",
            ProjectStatus::AssetsPartial => "assets_partial",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Status after `event`, or an error when the event is not allowed here.
    pub fn advance(self, event: ProjectEvent) -> Result<ProjectStatus, InvalidTransition> {
        use ProjectEvent::*;
        use ProjectStatus::*;

        match (self, event) {
            (Created | StrategyReady, StrategyGenerated) => Ok(StrategyReady),
            (StrategyReady | AssetsPartial, AssetGenerated) => Ok(AssetsPartial),
            (Completed, AssetGenerated) => Ok(Completed),
            (StrategyReady | AssetsPartial | Completed, PackageFinished) => Ok(Completed),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project document. Assets live in their own collection keyed by
/// `project_id`; the project never embeds them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandProject {
    #[serde(rename = "_id")]
    pub id: String,
    pub business_input: BusinessInput,
    pub brand_strategy: Option<BrandStrategy>,
    pub status: ProjectStatus,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl BrandProject {
    pub fn new(business_input: BusinessInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            business_input,
            brand_strategy: None,
            status: ProjectStatus::Created,
            created_at: now,
            updated_at: now,
        }
    }

    /// Advance the status and bump `updated_at`.
    pub fn apply(&mut self, event: ProjectEvent) -> Result<(), InvalidTransition> {
        self.status = self.status.advance(event)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn attach_strategy(&mut self, strategy: BrandStrategy) -> Result<(), InvalidTransition> {
        self.apply(ProjectEvent::StrategyGenerated)?;
        self.brand_strategy = Some(strategy);
        Ok(())
    }
}
