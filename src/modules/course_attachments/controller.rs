use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{AttachmentId, CourseAttachment, CourseAttachmentKey, CourseId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/course-attachments",
    request_body = CourseAttachment,
    responses(
        (status = 201, description = "Course attachment created successfully", body = CourseAttachment),
        (status = 400, description = "Invalid course attachment", body = ErrorResponse),
        (status = 409, description = "Course attachment already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Course Attachments"
)]
#[instrument(skip(state, course_attachment))]
pub async fn create_course_attachment(
    State(state): State<AppState>,
    JsonBody(course_attachment): JsonBody<Option<CourseAttachment>>,
) -> Result<(StatusCode, Json<CourseAttachment>), AppError> {
    let course_attachment = state.course_attachments.add(course_attachment).await?;

    Ok((StatusCode::CREATED, Json(course_attachment)))
}

#[utoipa::path(
    get,
    path = "/api/course-attachments",
    responses(
        (status = 200, description = "List of course attachments", body = Vec<CourseAttachment>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Course Attachments"
)]
#[instrument(skip(state))]
pub async fn get_course_attachments(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseAttachment>>, AppError> {
    let course_attachments = state.course_attachments.retrieve_all().await?;

    Ok(Json(course_attachments))
}

#[utoipa::path(
    get,
    path = "/api/course-attachments/courses/{course_id}/attachments/{attachment_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
        ("attachment_id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Course attachment details", body = CourseAttachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Course attachment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Course Attachments"
)]
#[instrument(skip(state))]
pub async fn get_course_attachment_by_id(
    State(state): State<AppState>,
    PathParam((course_id, attachment_id)): PathParam<(CourseId, AttachmentId)>,
) -> Result<Json<CourseAttachment>, AppError> {
    let key = CourseAttachmentKey {
        course_id,
        attachment_id,
    };
    let course_attachment = state.course_attachments.retrieve_by_id(key).await?;

    Ok(Json(course_attachment))
}

#[utoipa::path(
    put,
    path = "/api/course-attachments",
    request_body = CourseAttachment,
    responses(
        (status = 200, description = "Course attachment updated successfully", body = CourseAttachment),
        (status = 400, description = "Invalid course attachment", body = ErrorResponse),
        (status = 404, description = "Course attachment not found", body = ErrorResponse),
        (status = 423, description = "Course attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Course Attachments"
)]
#[instrument(skip(state, course_attachment))]
pub async fn update_course_attachment(
    State(state): State<AppState>,
    JsonBody(course_attachment): JsonBody<Option<CourseAttachment>>,
) -> Result<Json<CourseAttachment>, AppError> {
    let course_attachment = state.course_attachments.modify(course_attachment).await?;

    Ok(Json(course_attachment))
}

#[utoipa::path(
    delete,
    path = "/api/course-attachments/courses/{course_id}/attachments/{attachment_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
        ("attachment_id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Course attachment deleted successfully", body = CourseAttachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Course attachment not found", body = ErrorResponse),
        (status = 423, description = "Course attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Course Attachments"
)]
#[instrument(skip(state))]
pub async fn delete_course_attachment(
    State(state): State<AppState>,
    PathParam((course_id, attachment_id)): PathParam<(CourseId, AttachmentId)>,
) -> Result<Json<CourseAttachment>, AppError> {
    let key = CourseAttachmentKey {
        course_id,
        attachment_id,
    };
    let course_attachment = state.course_attachments.remove_by_id(key).await?;

    Ok(Json(course_attachment))
}
