use crate::dtos::{StatusCheckCreate, StatusCheckResponse};
use crate::models::StatusCheck;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

/// Upper bound on status checks returned by the list endpoint.
const STATUS_LIST_LIMIT: i64 = 1000;

pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;

    let check = StatusCheck::new(input.client_name);
    state.store.insert_status_check(&check).await?;

    Ok(Json(StatusCheckResponse::from(check)))
}

pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let checks = state.store.status_checks(STATUS_LIST_LIMIT).await?;

    Ok(Json(
        checks
            .into_iter()
            .map(StatusCheckResponse::from)
            .collect::<Vec<_>>(),
    ))
}
