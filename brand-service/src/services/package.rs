//! Complete brand package generation.
//!
//! Walks a fixed list of six assets one at a time. A failed asset is recorded
//! and skipped; the run always ends with the project marked completed.

use crate::dtos::FailedAsset;
use crate::models::{AssetType, BrandProject, GeneratedAsset, ProjectEvent};
use crate::services::assets::AssetGenerator;
use crate::services::store::{transition_project, BrandStore};
use service_core::error::AppError;
use std::sync::Arc;

/// Assets of a complete package, in generation order.
pub const PACKAGE_ASSETS: [(AssetType, &str); 6] = [
    (AssetType::Logo, "primary brand mark"),
    (AssetType::BusinessCard, "professional contact card"),
    (AssetType::Letterhead, "official business correspondence"),
    (AssetType::SocialMediaPost, "brand introduction announcement"),
    (AssetType::Flyer, "promotional marketing material"),
    (AssetType::Banner, "website hero header"),
];

#[derive(Debug, Default)]
pub struct PackageOutcome {
    pub generated: Vec<GeneratedAsset>,
    pub failed: Vec<FailedAsset>,
}

#[derive(Clone)]
pub struct PackageGenerator {
    assets: AssetGenerator,
    store: Arc<dyn BrandStore>,
}

impl PackageGenerator {
    pub fn new(assets: AssetGenerator, store: Arc<dyn BrandStore>) -> Self {
        Self { assets, store }
    }

    /// Generate and persist every package asset, then mark the project
    /// completed and save it.
    pub async fn run(&self, project: &mut BrandProject) -> Result<PackageOutcome, AppError> {
        let strategy = project.brand_strategy.clone().ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!(
                "Brand strategy must be generated before assets"
            ))
        })?;
        project.status.advance(ProjectEvent::PackageFinished)?;

        let mut outcome = PackageOutcome::default();

        for (asset_type, context) in PACKAGE_ASSETS {
            let generated = self
                .assets
                .generate(
                    &project.id,
                    &project.business_input,
                    &strategy,
                    asset_type,
                    Some(context.to_string()),
                )
                .await
                .map_err(|e| e.to_string());

            let stored = match generated {
                Ok(asset) => match self.store.insert_asset(&asset).await {
                    Ok(()) => Ok(asset),
                    Err(e) => Err(e.to_string()),
                },
                Err(reason) => Err(reason),
            };

            match stored {
                Ok(asset) => outcome.generated.push(asset),
                Err(reason) => {
                    tracing::warn!(
                        project_id = %project.id,
                        asset_type = %asset_type,
                        reason = %reason,
                        "Skipping package asset"
                    );
                    outcome.failed.push(FailedAsset { asset_type, reason });
                }
            }
        }

        let any_generated = !outcome.generated.is_empty();
        if !any_generated {
            tracing::warn!(
                project_id = %project.id,
                "Package finished without any generated asset"
            );
        }
        let project_id = project.id.clone();
        *project = transition_project(self.store.as_ref(), &project_id, |p| {
            if any_generated {
                p.apply(ProjectEvent::AssetGenerated)?;
            }
            p.apply(ProjectEvent::PackageFinished)
        })
        .await?;

        tracing::info!(
            project_id = %project.id,
            generated = outcome.generated.len(),
            failed = outcome.failed.len(),
            "Brand package completed"
        );

        Ok(outcome)
    }
}
