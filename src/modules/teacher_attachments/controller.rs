use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{AttachmentId, TeacherAttachment, TeacherAttachmentKey, TeacherId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/teacher-attachments",
    request_body = TeacherAttachment,
    responses(
        (status = 201, description = "Teacher attachment created successfully", body = TeacherAttachment),
        (status = 400, description = "Invalid teacher attachment", body = ErrorResponse),
        (status = 409, description = "Teacher attachment already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Attachments"
)]
#[instrument(skip(state, teacher_attachment))]
pub async fn create_teacher_attachment(
    State(state): State<AppState>,
    JsonBody(teacher_attachment): JsonBody<Option<TeacherAttachment>>,
) -> Result<(StatusCode, Json<TeacherAttachment>), AppError> {
    let teacher_attachment = state.teacher_attachments.add(teacher_attachment).await?;

    Ok((StatusCode::CREATED, Json(teacher_attachment)))
}

#[utoipa::path(
    get,
    path = "/api/teacher-attachments",
    responses(
        (status = 200, description = "List of teacher attachments", body = Vec<TeacherAttachment>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Attachments"
)]
#[instrument(skip(state))]
pub async fn get_teacher_attachments(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherAttachment>>, AppError> {
    let teacher_attachments = state.teacher_attachments.retrieve_all().await?;

    Ok(Json(teacher_attachments))
}

#[utoipa::path(
    get,
    path = "/api/teacher-attachments/teachers/{teacher_id}/attachments/{attachment_id}",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID"),
        ("attachment_id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Teacher attachment details", body = TeacherAttachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher attachment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Attachments"
)]
#[instrument(skip(state))]
pub async fn get_teacher_attachment_by_id(
    State(state): State<AppState>,
    PathParam((teacher_id, attachment_id)): PathParam<(TeacherId, AttachmentId)>,
) -> Result<Json<TeacherAttachment>, AppError> {
    let key = TeacherAttachmentKey {
        teacher_id,
        attachment_id,
    };
    let teacher_attachment = state.teacher_attachments.retrieve_by_id(key).await?;

    Ok(Json(teacher_attachment))
}

#[utoipa::path(
    put,
    path = "/api/teacher-attachments",
    request_body = TeacherAttachment,
    responses(
        (status = 200, description = "Teacher attachment updated successfully", body = TeacherAttachment),
        (status = 400, description = "Invalid teacher attachment", body = ErrorResponse),
        (status = 404, description = "Teacher attachment not found", body = ErrorResponse),
        (status = 423, description = "Teacher attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Attachments"
)]
#[instrument(skip(state, teacher_attachment))]
pub async fn update_teacher_attachment(
    State(state): State<AppState>,
    JsonBody(teacher_attachment): JsonBody<Option<TeacherAttachment>>,
) -> Result<Json<TeacherAttachment>, AppError> {
    let teacher_attachment = state.teacher_attachments.modify(teacher_attachment).await?;

    Ok(Json(teacher_attachment))
}

#[utoipa::path(
    delete,
    path = "/api/teacher-attachments/teachers/{teacher_id}/attachments/{attachment_id}",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID"),
        ("attachment_id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Teacher attachment deleted successfully", body = TeacherAttachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher attachment not found", body = ErrorResponse),
        (status = 423, description = "Teacher attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Attachments"
)]
#[instrument(skip(state))]
pub async fn delete_teacher_attachment(
    State(state): State<AppState>,
    PathParam((teacher_id, attachment_id)): PathParam<(TeacherId, AttachmentId)>,
) -> Result<Json<TeacherAttachment>, AppError> {
    let key = TeacherAttachmentKey {
        teacher_id,
        attachment_id,
    };
    let teacher_attachment = state.teacher_attachments.remove_by_id(key).await?;

    Ok(Json(teacher_attachment))
}
