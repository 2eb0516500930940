use crate::handlers::projects::load_project;
use crate::models::ProjectEvent;
use crate::services::store::transition_project;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn generate_strategy(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = load_project(&state, &project_id).await?;

    // Reject before spending a model call.
    project.status.advance(ProjectEvent::StrategyGenerated)?;

    let strategy = state
        .strategies
        .generate(&project.business_input)
        .await
        .map_err(|e| {
            tracing::error!(
                project_id = %project.id,
                model = %state.strategies.model(),
                "Strategy generation failed: {}",
                e
            );
            AppError::from(e)
        })?;

    // Re-checked against the stored status, which may have moved meanwhile.
    let project = transition_project(state.store.as_ref(), &project.id, |p| {
        p.attach_strategy(strategy.clone())
    })
    .await?;

    tracing::info!(
        project_id = %project.id,
        parsed = strategy.raw_response.is_none(),
        "Brand strategy generated"
    );

    Ok(Json(strategy))
}
