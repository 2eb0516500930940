use crate::dtos::{CreateProjectRequest, ProjectListParams, ProjectResponse};
use crate::models::BrandProject;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use std::collections::HashMap;
use validator::Validate;

/// Load a project or fail with 404.
pub(crate) async fn load_project(state: &AppState, project_id: &str) -> Result<BrandProject, AppError> {
    state
        .store
        .find_project(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Project {} not found", project_id)))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;

    let project = BrandProject::new(input);
    state.store.insert_project(&project).await?;

    tracing::info!(
        project_id = %project.id,
        business = %project.business_input.business_name,
        "Brand project created"
    );

    Ok(Json(ProjectResponse::assemble(project, Vec::new())))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = load_project(&state, &project_id).await?;
    let assets = state.store.list_assets(&project.id).await?;

    Ok(Json(ProjectResponse::assemble(project, assets)))
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Result<impl IntoResponse, AppError> {
    let projects = state
        .store
        .list_projects(params.effective_limit())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list projects: {}", e);
            e
        })?;

    let ids: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();
    let mut assets_by_project: HashMap<String, Vec<_>> = HashMap::new();
    for asset in state.store.assets_for_projects(&ids).await? {
        assets_by_project
            .entry(asset.project_id.clone())
            .or_default()
            .push(asset);
    }

    let response: Vec<ProjectResponse> = projects
        .into_iter()
        .map(|project| {
            let assets = assets_by_project.remove(&project.id).unwrap_or_default();
            ProjectResponse::assemble(project, assets)
        })
        .collect();

    Ok(Json(response))
}
