use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{AttachmentId, ExamAttachment, ExamAttachmentKey, ExamId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/exam-attachments",
    request_body = ExamAttachment,
    responses(
        (status = 201, description = "Exam attachment created successfully", body = ExamAttachment),
        (status = 400, description = "Invalid exam attachment", body = ErrorResponse),
        (status = 409, description = "Exam attachment already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exam Attachments"
)]
#[instrument(skip(state, exam_attachment))]
pub async fn create_exam_attachment(
    State(state): State<AppState>,
    JsonBody(exam_attachment): JsonBody<Option<ExamAttachment>>,
) -> Result<(StatusCode, Json<ExamAttachment>), AppError> {
    let exam_attachment = state.exam_attachments.add(exam_attachment).await?;

    Ok((StatusCode::CREATED, Json(exam_attachment)))
}

#[utoipa::path(
    get,
    path = "/api/exam-attachments",
    responses(
        (status = 200, description = "List of exam attachments", body = Vec<ExamAttachment>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exam Attachments"
)]
#[instrument(skip(state))]
pub async fn get_exam_attachments(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExamAttachment>>, AppError> {
    let exam_attachments = state.exam_attachments.retrieve_all().await?;

    Ok(Json(exam_attachments))
}

#[utoipa::path(
    get,
    path = "/api/exam-attachments/exams/{exam_id}/attachments/{attachment_id}",
    params(
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        ("attachment_id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Exam attachment details", body = ExamAttachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Exam attachment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exam Attachments"
)]
#[instrument(skip(state))]
pub async fn get_exam_attachment_by_id(
    State(state): State<AppState>,
    PathParam((exam_id, attachment_id)): PathParam<(ExamId, AttachmentId)>,
) -> Result<Json<ExamAttachment>, AppError> {
    let key = ExamAttachmentKey {
        exam_id,
        attachment_id,
    };
    let exam_attachment = state.exam_attachments.retrieve_by_id(key).await?;

    Ok(Json(exam_attachment))
}

#[utoipa::path(
    put,
    path = "/api/exam-attachments",
    request_body = ExamAttachment,
    responses(
        (status = 200, description = "Exam attachment updated successfully", body = ExamAttachment),
        (status = 400, description = "Invalid exam attachment", body = ErrorResponse),
        (status = 404, description = "Exam attachment not found", body = ErrorResponse),
        (status = 423, description = "Exam attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exam Attachments"
)]
#[instrument(skip(state, exam_attachment))]
pub async fn update_exam_attachment(
    State(state): State<AppState>,
    JsonBody(exam_attachment): JsonBody<Option<ExamAttachment>>,
) -> Result<Json<ExamAttachment>, AppError> {
    let exam_attachment = state.exam_attachments.modify(exam_attachment).await?;

    Ok(Json(exam_attachment))
}

#[utoipa::path(
    delete,
    path = "/api/exam-attachments/exams/{exam_id}/attachments/{attachment_id}",
    params(
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        ("attachment_id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Exam attachment deleted successfully", body = ExamAttachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Exam attachment not found", body = ErrorResponse),
        (status = 423, description = "Exam attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exam Attachments"
)]
#[instrument(skip(state))]
pub async fn delete_exam_attachment(
    State(state): State<AppState>,
    PathParam((exam_id, attachment_id)): PathParam<(ExamId, AttachmentId)>,
) -> Result<Json<ExamAttachment>, AppError> {
    let key = ExamAttachmentKey {
        exam_id,
        attachment_id,
    };
    let exam_attachment = state.exam_attachments.remove_by_id(key).await?;

    Ok(Json(exam_attachment))
}
