use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Course, CourseId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = Course,
    responses(
        (status = 201, description = "Course created successfully", body = Course),
        (status = 400, description = "Invalid course", body = ErrorResponse),
        (status = 409, description = "Course already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, course))]
pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(course): JsonBody<Option<Course>>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = state.courses.add(course).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "List of courses", body = Vec<Course>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.courses.retrieve_all().await?;

    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = Course),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<CourseId>,
) -> Result<Json<Course>, AppError> {
    let course = state.courses.retrieve_by_id(id).await?;

    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/courses",
    request_body = Course,
    responses(
        (status = 200, description = "Course updated successfully", body = Course),
        (status = 400, description = "Invalid course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 423, description = "Course record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, course))]
pub async fn update_course(
    State(state): State<AppState>,
    JsonBody(course): JsonBody<Option<Course>>,
) -> Result<Json<Course>, AppError> {
    let course = state.courses.modify(course).await?;

    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted successfully", body = Course),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 423, description = "Course record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    PathParam(id): PathParam<CourseId>,
) -> Result<Json<Course>, AppError> {
    let course = state.courses.remove_by_id(id).await?;

    Ok(Json(course))
}
