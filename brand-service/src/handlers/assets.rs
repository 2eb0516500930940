use crate::dtos::{AssetQuery, AssetResponse, PackageResponse};
use crate::handlers::projects::load_project;
use crate::models::{AssetType, ProjectEvent};
use crate::services::store::transition_project;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use service_core::genai::ProviderError;

pub async fn generate_asset(
    State(state): State<AppState>,
    Path((project_id, asset_type)): Path<(String, String)>,
    Query(query): Query<AssetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let project = load_project(&state, &project_id).await?;

    let asset_type: AssetType = asset_type
        .parse()
        .map_err(|e: String| AppError::BadRequest(anyhow::anyhow!(e)))?;

    let strategy = project.brand_strategy.clone().ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!(
            "Brand strategy must be generated before assets"
        ))
    })?;
    project.status.advance(ProjectEvent::AssetGenerated)?;

    let asset = state
        .assets
        .generate(
            &project.id,
            &project.business_input,
            &strategy,
            asset_type,
            query.context,
        )
        .await
        .map_err(|e| {
            tracing::error!(
                project_id = %project.id,
                asset_type = %asset_type,
                model = %state.assets.model(),
                "Asset generation failed: {}",
                e
            );
            match e {
                not_configured @ ProviderError::NotConfigured(_) => AppError::from(not_configured),
                other => AppError::BadGateway(format!(
                    "Image generation failed for {}: {}",
                    asset_type, other
                )),
            }
        })?;

    state.store.insert_asset(&asset).await?;
    transition_project(state.store.as_ref(), &project.id, |p| {
        p.apply(ProjectEvent::AssetGenerated)
    })
    .await?;

    Ok(Json(AssetResponse::from(asset)))
}

pub async fn generate_complete_package(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut project = load_project(&state, &project_id).await?;

    let outcome = state.packages.run(&mut project).await?;

    let generated_assets: Vec<AssetResponse> = outcome
        .generated
        .into_iter()
        .map(AssetResponse::from)
        .collect();

    Ok(Json(PackageResponse {
        project_id: project.id,
        total_assets: generated_assets.len(),
        generated_assets,
        status: project.status,
        failed_assets: outcome.failed,
    }))
}
