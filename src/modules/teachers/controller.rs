use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Teacher, TeacherId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// New teachers must be `active`.
#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = Teacher,
    responses(
        (status = 201, description = "Teacher created successfully", body = Teacher),
        (status = 400, description = "Invalid teacher", body = ErrorResponse),
        (status = 409, description = "Teacher already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, teacher))]
pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(teacher): JsonBody<Option<Teacher>>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = state.teachers.add(teacher).await?;

    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "List of teachers", body = Vec<Teacher>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = state.teachers.retrieve_all().await?;

    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<TeacherId>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.retrieve_by_id(id).await?;

    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/teachers",
    request_body = Teacher,
    responses(
        (status = 200, description = "Teacher updated successfully", body = Teacher),
        (status = 400, description = "Invalid teacher", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 423, description = "Teacher record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, teacher))]
pub async fn update_teacher(
    State(state): State<AppState>,
    JsonBody(teacher): JsonBody<Option<Teacher>>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.modify(teacher).await?;

    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher deleted successfully", body = Teacher),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 423, description = "Teacher record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    PathParam(id): PathParam<TeacherId>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.remove_by_id(id).await?;

    Ok(Json(teacher))
}
