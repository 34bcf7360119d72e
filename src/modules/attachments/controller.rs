use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Attachment, AttachmentId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/attachments",
    request_body = Attachment,
    responses(
        (status = 201, description = "Attachment created successfully", body = Attachment),
        (status = 400, description = "Invalid attachment", body = ErrorResponse),
        (status = 409, description = "Attachment already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attachments"
)]
#[instrument(skip(state, attachment))]
pub async fn create_attachment(
    State(state): State<AppState>,
    JsonBody(attachment): JsonBody<Option<Attachment>>,
) -> Result<(StatusCode, Json<Attachment>), AppError> {
    let attachment = state.attachments.add(attachment).await?;

    Ok((StatusCode::CREATED, Json(attachment)))
}

#[utoipa::path(
    get,
    path = "/api/attachments",
    responses(
        (status = 200, description = "List of attachments", body = Vec<Attachment>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attachments"
)]
#[instrument(skip(state))]
pub async fn get_attachments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Attachment>>, AppError> {
    let attachments = state.attachments.retrieve_all().await?;

    Ok(Json(attachments))
}

#[utoipa::path(
    get,
    path = "/api/attachments/{id}",
    params(
        ("id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Attachment details", body = Attachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Attachment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attachments"
)]
#[instrument(skip(state))]
pub async fn get_attachment_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<AttachmentId>,
) -> Result<Json<Attachment>, AppError> {
    let attachment = state.attachments.retrieve_by_id(id).await?;

    Ok(Json(attachment))
}

#[utoipa::path(
    put,
    path = "/api/attachments",
    request_body = Attachment,
    responses(
        (status = 200, description = "Attachment updated successfully", body = Attachment),
        (status = 400, description = "Invalid attachment", body = ErrorResponse),
        (status = 404, description = "Attachment not found", body = ErrorResponse),
        (status = 423, description = "Attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attachments"
)]
#[instrument(skip(state, attachment))]
pub async fn update_attachment(
    State(state): State<AppState>,
    JsonBody(attachment): JsonBody<Option<Attachment>>,
) -> Result<Json<Attachment>, AppError> {
    let attachment = state.attachments.modify(attachment).await?;

    Ok(Json(attachment))
}

#[utoipa::path(
    delete,
    path = "/api/attachments/{id}",
    params(
        ("id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Attachment deleted successfully", body = Attachment),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Attachment not found", body = ErrorResponse),
        (status = 423, description = "Attachment record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attachments"
)]
#[instrument(skip(state))]
pub async fn delete_attachment(
    State(state): State<AppState>,
    PathParam(id): PathParam<AttachmentId>,
) -> Result<Json<Attachment>, AppError> {
    let attachment = state.attachments.remove_by_id(id).await?;

    Ok(Json(attachment))
}
