use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Assignment, AssignmentId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = Assignment,
    responses(
        (status = 201, description = "Assignment created successfully", body = Assignment),
        (status = 400, description = "Invalid assignment", body = ErrorResponse),
        (status = 409, description = "Assignment already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state, assignment))]
pub async fn create_assignment(
    State(state): State<AppState>,
    JsonBody(assignment): JsonBody<Option<Assignment>>,
) -> Result<(StatusCode, Json<Assignment>), AppError> {
    let assignment = state.assignments.add(assignment).await?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

#[utoipa::path(
    get,
    path = "/api/assignments",
    responses(
        (status = 200, description = "List of assignments", body = Vec<Assignment>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn get_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = state.assignments.retrieve_all().await?;

    Ok(Json(assignments))
}

#[utoipa::path(
    get,
    path = "/api/assignments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment details", body = Assignment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn get_assignment_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<AssignmentId>,
) -> Result<Json<Assignment>, AppError> {
    let assignment = state.assignments.retrieve_by_id(id).await?;

    Ok(Json(assignment))
}

#[utoipa::path(
    put,
    path = "/api/assignments",
    request_body = Assignment,
    responses(
        (status = 200, description = "Assignment updated successfully", body = Assignment),
        (status = 400, description = "Invalid assignment", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 423, description = "Assignment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state, assignment))]
pub async fn update_assignment(
    State(state): State<AppState>,
    JsonBody(assignment): JsonBody<Option<Assignment>>,
) -> Result<Json<Assignment>, AppError> {
    let assignment = state.assignments.modify(assignment).await?;

    Ok(Json(assignment))
}

#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment deleted successfully", body = Assignment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 423, description = "Assignment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn delete_assignment(
    State(state): State<AppState>,
    PathParam(id): PathParam<AssignmentId>,
) -> Result<Json<Assignment>, AppError> {
    let assignment = state.assignments.remove_by_id(id).await?;

    Ok(Json(assignment))
}
