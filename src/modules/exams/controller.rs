use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Exam, ExamId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/exams",
    request_body = Exam,
    responses(
        (status = 201, description = "Exam created successfully", body = Exam),
        (status = 400, description = "Invalid exam", body = ErrorResponse),
        (status = 409, description = "Exam already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state, exam))]
pub async fn create_exam(
    State(state): State<AppState>,
    JsonBody(exam): JsonBody<Option<Exam>>,
) -> Result<(StatusCode, Json<Exam>), AppError> {
    let exam = state.exams.add(exam).await?;

    Ok((StatusCode::CREATED, Json(exam)))
}

#[utoipa::path(
    get,
    path = "/api/exams",
    responses(
        (status = 200, description = "List of exams", body = Vec<Exam>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn get_exams(State(state): State<AppState>) -> Result<Json<Vec<Exam>>, AppError> {
    let exams = state.exams.retrieve_all().await?;

    Ok(Json(exams))
}

#[utoipa::path(
    get,
    path = "/api/exams/{id}",
    params(
        ("id" = Uuid, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Exam details", body = Exam),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn get_exam_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<ExamId>,
) -> Result<Json<Exam>, AppError> {
    let exam = state.exams.retrieve_by_id(id).await?;

    Ok(Json(exam))
}

#[utoipa::path(
    put,
    path = "/api/exams",
    request_body = Exam,
    responses(
        (status = 200, description = "Exam updated successfully", body = Exam),
        (status = 400, description = "Invalid exam", body = ErrorResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 423, description = "Exam record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state, exam))]
pub async fn update_exam(
    State(state): State<AppState>,
    JsonBody(exam): JsonBody<Option<Exam>>,
) -> Result<Json<Exam>, AppError> {
    let exam = state.exams.modify(exam).await?;

    Ok(Json(exam))
}

#[utoipa::path(
    delete,
    path = "/api/exams/{id}",
    params(
        ("id" = Uuid, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Exam deleted successfully", body = Exam),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 423, description = "Exam record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn delete_exam(
    State(state): State<AppState>,
    PathParam(id): PathParam<ExamId>,
) -> Result<Json<Exam>, AppError> {
    let exam = state.exams.remove_by_id(id).await?;

    Ok(Json(exam))
}
