use crate::dtos::{
    EnhancePromptRequest, EnhancementHistoryParams, EnhancementResponse, StyleCatalogResponse,
};
use crate::models::EnhancementRecord;
use crate::services::EnhancementStyle;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use metrics::counter;
use service_core::error::AppError;

pub async fn enhance_prompt(
    State(state): State<AppState>,
    Json(request): Json<EnhancePromptRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.original_prompt.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Original prompt cannot be empty"
        )));
    }

    let style_label = EnhancementStyle::resolve(&request.enhancement_style).id();

    let enhancement = state
        .enhancer
        .enhance(&request.original_prompt, &request.enhancement_style)
        .await
        .map_err(|e| {
            tracing::error!(
                style = %request.enhancement_style,
                model = %state.enhancer.model(),
                "Enhancement failed: {}",
                e
            );
            counter!("prompt_enhancements_total", "style" => style_label, "outcome" => "failed")
                .increment(1);
            AppError::from(e)
        })?;

    let record = EnhancementRecord::new(
        request.original_prompt,
        enhancement.enhanced_prompt,
        request.enhancement_style,
        enhancement.reasoning,
    );

    state.store.insert_enhancement(&record).await?;

    counter!("prompt_enhancements_total", "style" => style_label, "outcome" => "ok").increment(1);
    tracing::info!(
        enhancement_id = %record.id,
        style = %record.style,
        "Prompt enhanced"
    );

    Ok(Json(EnhancementResponse::from(record)))
}

pub async fn enhancement_history(
    State(state): State<AppState>,
    Query(params): Query<EnhancementHistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let records = state
        .store
        .recent_enhancements(params.effective_limit())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch enhancement history: {}", e);
            e
        })?;

    let history: Vec<EnhancementResponse> =
        records.into_iter().map(EnhancementResponse::from).collect();

    Ok(Json(history))
}

pub async fn enhancement_styles() -> impl IntoResponse {
    Json(StyleCatalogResponse {
        styles: EnhancementStyle::ALL.iter().map(|s| s.info()).collect(),
    })
}
