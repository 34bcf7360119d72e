use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Guardian, GuardianId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/guardians",
    request_body = Guardian,
    responses(
        (status = 201, description = "Guardian created successfully", body = Guardian),
        (status = 400, description = "Invalid guardian", body = ErrorResponse),
        (status = 409, description = "Guardian already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Guardians"
)]
#[instrument(skip(state, guardian))]
pub async fn create_guardian(
    State(state): State<AppState>,
    JsonBody(guardian): JsonBody<Option<Guardian>>,
) -> Result<(StatusCode, Json<Guardian>), AppError> {
    let guardian = state.guardians.add(guardian).await?;

    Ok((StatusCode::CREATED, Json(guardian)))
}

#[utoipa::path(
    get,
    path = "/api/guardians",
    responses(
        (status = 200, description = "List of guardians", body = Vec<Guardian>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Guardians"
)]
#[instrument(skip(state))]
pub async fn get_guardians(State(state): State<AppState>) -> Result<Json<Vec<Guardian>>, AppError> {
    let guardians = state.guardians.retrieve_all().await?;

    Ok(Json(guardians))
}

#[utoipa::path(
    get,
    path = "/api/guardians/{id}",
    params(
        ("id" = Uuid, Path, description = "Guardian ID")
    ),
    responses(
        (status = 200, description = "Guardian details", body = Guardian),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Guardian not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Guardians"
)]
#[instrument(skip(state))]
pub async fn get_guardian_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<GuardianId>,
) -> Result<Json<Guardian>, AppError> {
    let guardian = state.guardians.retrieve_by_id(id).await?;

    Ok(Json(guardian))
}

#[utoipa::path(
    put,
    path = "/api/guardians",
    request_body = Guardian,
    responses(
        (status = 200, description = "Guardian updated successfully", body = Guardian),
        (status = 400, description = "Invalid guardian", body = ErrorResponse),
        (status = 404, description = "Guardian not found", body = ErrorResponse),
        (status = 423, description = "Guardian record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Guardians"
)]
#[instrument(skip(state, guardian))]
pub async fn update_guardian(
    State(state): State<AppState>,
    JsonBody(guardian): JsonBody<Option<Guardian>>,
) -> Result<Json<Guardian>, AppError> {
    let guardian = state.guardians.modify(guardian).await?;

    Ok(Json(guardian))
}

#[utoipa::path(
    delete,
    path = "/api/guardians/{id}",
    params(
        ("id" = Uuid, Path, description = "Guardian ID")
    ),
    responses(
        (status = 200, description = "Guardian deleted successfully", body = Guardian),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Guardian not found", body = ErrorResponse),
        (status = 423, description = "Guardian record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Guardians"
)]
#[instrument(skip(state))]
pub async fn delete_guardian(
    State(state): State<AppState>,
    PathParam(id): PathParam<GuardianId>,
) -> Result<Json<Guardian>, AppError> {
    let guardian = state.guardians.remove_by_id(id).await?;

    Ok(Json(guardian))
}
