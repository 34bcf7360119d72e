use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{SemesterCourse, SemesterCourseId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/semester-courses",
    request_body = SemesterCourse,
    responses(
        (status = 201, description = "Semester course created successfully", body = SemesterCourse),
        (status = 400, description = "Invalid semester course", body = ErrorResponse),
        (status = 409, description = "Semester course already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Semester Courses"
)]
#[instrument(skip(state, semester_course))]
pub async fn create_semester_course(
    State(state): State<AppState>,
    JsonBody(semester_course): JsonBody<Option<SemesterCourse>>,
) -> Result<(StatusCode, Json<SemesterCourse>), AppError> {
    let semester_course = state.semester_courses.add(semester_course).await?;

    Ok((StatusCode::CREATED, Json(semester_course)))
}

#[utoipa::path(
    get,
    path = "/api/semester-courses",
    responses(
        (status = 200, description = "List of semester courses", body = Vec<SemesterCourse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Semester Courses"
)]
#[instrument(skip(state))]
pub async fn get_semester_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<SemesterCourse>>, AppError> {
    let semester_courses = state.semester_courses.retrieve_all().await?;

    Ok(Json(semester_courses))
}

#[utoipa::path(
    get,
    path = "/api/semester-courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Semester course ID")
    ),
    responses(
        (status = 200, description = "Semester course details", body = SemesterCourse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Semester course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Semester Courses"
)]
#[instrument(skip(state))]
pub async fn get_semester_course_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<SemesterCourseId>,
) -> Result<Json<SemesterCourse>, AppError> {
    let semester_course = state.semester_courses.retrieve_by_id(id).await?;

    Ok(Json(semester_course))
}

#[utoipa::path(
    put,
    path = "/api/semester-courses",
    request_body = SemesterCourse,
    responses(
        (status = 200, description = "Semester course updated successfully", body = SemesterCourse),
        (status = 400, description = "Invalid semester course", body = ErrorResponse),
        (status = 404, description = "Semester course not found", body = ErrorResponse),
        (status = 423, description = "Semester course record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Semester Courses"
)]
#[instrument(skip(state, semester_course))]
pub async fn update_semester_course(
    State(state): State<AppState>,
    JsonBody(semester_course): JsonBody<Option<SemesterCourse>>,
) -> Result<Json<SemesterCourse>, AppError> {
    let semester_course = state.semester_courses.modify(semester_course).await?;

    Ok(Json(semester_course))
}

#[utoipa::path(
    delete,
    path = "/api/semester-courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Semester course ID")
    ),
    responses(
        (status = 200, description = "Semester course deleted successfully", body = SemesterCourse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Semester course not found", body = ErrorResponse),
        (status = 423, description = "Semester course record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Semester Courses"
)]
#[instrument(skip(state))]
pub async fn delete_semester_course(
    State(state): State<AppState>,
    PathParam(id): PathParam<SemesterCourseId>,
) -> Result<Json<SemesterCourse>, AppError> {
    let semester_course = state.semester_courses.remove_by_id(id).await?;

    Ok(Json(semester_course))
}
