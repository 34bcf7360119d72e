use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{GuardianId, StudentGuardian, StudentGuardianKey, StudentId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/student-guardians",
    request_body = StudentGuardian,
    responses(
        (status = 201, description = "Student guardian created successfully", body = StudentGuardian),
        (status = 400, description = "Invalid student guardian", body = ErrorResponse),
        (status = 409, description = "Student guardian already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student Guardians"
)]
#[instrument(skip(state, student_guardian))]
pub async fn create_student_guardian(
    State(state): State<AppState>,
    JsonBody(student_guardian): JsonBody<Option<StudentGuardian>>,
) -> Result<(StatusCode, Json<StudentGuardian>), AppError> {
    let student_guardian = state.student_guardians.add(student_guardian).await?;

    Ok((StatusCode::CREATED, Json(student_guardian)))
}

#[utoipa::path(
    get,
    path = "/api/student-guardians",
    responses(
        (status = 200, description = "List of student guardians", body = Vec<StudentGuardian>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student Guardians"
)]
#[instrument(skip(state))]
pub async fn get_student_guardians(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentGuardian>>, AppError> {
    let student_guardians = state.student_guardians.retrieve_all().await?;

    Ok(Json(student_guardians))
}

#[utoipa::path(
    get,
    path = "/api/student-guardians/students/{student_id}/guardians/{guardian_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student ID"),
        ("guardian_id" = Uuid, Path, description = "Guardian ID")
    ),
    responses(
        (status = 200, description = "Student guardian details", body = StudentGuardian),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Student guardian not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student Guardians"
)]
#[instrument(skip(state))]
pub async fn get_student_guardian_by_id(
    State(state): State<AppState>,
    PathParam((student_id, guardian_id)): PathParam<(StudentId, GuardianId)>,
) -> Result<Json<StudentGuardian>, AppError> {
    let key = StudentGuardianKey {
        student_id,
        guardian_id,
    };
    let student_guardian = state.student_guardians.retrieve_by_id(key).await?;

    Ok(Json(student_guardian))
}

#[utoipa::path(
    put,
    path = "/api/student-guardians",
    request_body = StudentGuardian,
    responses(
        (status = 200, description = "Student guardian updated successfully", body = StudentGuardian),
        (status = 400, description = "Invalid student guardian", body = ErrorResponse),
        (status = 404, description = "Student guardian not found", body = ErrorResponse),
        (status = 423, description = "Student guardian record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student Guardians"
)]
#[instrument(skip(state, student_guardian))]
pub async fn update_student_guardian(
    State(state): State<AppState>,
    JsonBody(student_guardian): JsonBody<Option<StudentGuardian>>,
) -> Result<Json<StudentGuardian>, AppError> {
    let student_guardian = state.student_guardians.modify(student_guardian).await?;

    Ok(Json(student_guardian))
}

/// Unlinks a guardian from a student. Neither record is deleted.
#[utoipa::path(
    delete,
    path = "/api/student-guardians/students/{student_id}/guardians/{guardian_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student ID"),
        ("guardian_id" = Uuid, Path, description = "Guardian ID")
    ),
    responses(
        (status = 200, description = "Student guardian deleted successfully", body = StudentGuardian),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Student guardian not found", body = ErrorResponse),
        (status = 423, description = "Student guardian record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student Guardians"
)]
#[instrument(skip(state))]
pub async fn delete_student_guardian(
    State(state): State<AppState>,
    PathParam((student_id, guardian_id)): PathParam<(StudentId, GuardianId)>,
) -> Result<Json<StudentGuardian>, AppError> {
    let key = StudentGuardianKey {
        student_id,
        guardian_id,
    };
    let student_guardian = state.student_guardians.remove_by_id(key).await?;

    Ok(Json(student_guardian))
}
