use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Student, StudentId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = Student,
    responses(
        (status = 201, description = "Student created successfully", body = Student),
        (status = 400, description = "Invalid student", body = ErrorResponse),
        (status = 409, description = "Student already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, student))]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(student): JsonBody<Option<Student>>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = state.students.add(student).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List of students", body = Vec<Student>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.retrieve_all().await?;

    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<StudentId>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.retrieve_by_id(id).await?;

    Ok(Json(student))
}

/// Replaces a stored student.
///
/// `created_by` and `created_date` must match the stored record, and
/// `updated_date` must be recent and differ from the stored one.
#[utoipa::path(
    put,
    path = "/api/students",
    request_body = Student,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 400, description = "Invalid student", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 423, description = "Student record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, student))]
pub async fn update_student(
    State(state): State<AppState>,
    JsonBody(student): JsonBody<Option<Student>>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.modify(student).await?;

    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted successfully", body = Student),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 423, description = "Student record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<StudentId>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.remove_by_id(id).await?;

    Ok(Json(student))
}
