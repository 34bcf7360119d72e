use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{ContactId, TeacherContact, TeacherContactKey, TeacherId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/teacher-contacts",
    request_body = TeacherContact,
    responses(
        (status = 201, description = "Teacher contact created successfully", body = TeacherContact),
        (status = 400, description = "Invalid teacher contact", body = ErrorResponse),
        (status = 409, description = "Teacher contact already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Contacts"
)]
#[instrument(skip(state, teacher_contact))]
pub async fn create_teacher_contact(
    State(state): State<AppState>,
    JsonBody(teacher_contact): JsonBody<Option<TeacherContact>>,
) -> Result<(StatusCode, Json<TeacherContact>), AppError> {
    let teacher_contact = state.teacher_contacts.add(teacher_contact).await?;

    Ok((StatusCode::CREATED, Json(teacher_contact)))
}

#[utoipa::path(
    get,
    path = "/api/teacher-contacts",
    responses(
        (status = 200, description = "List of teacher contacts", body = Vec<TeacherContact>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Contacts"
)]
#[instrument(skip(state))]
pub async fn get_teacher_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherContact>>, AppError> {
    let teacher_contacts = state.teacher_contacts.retrieve_all().await?;

    Ok(Json(teacher_contacts))
}

#[utoipa::path(
    get,
    path = "/api/teacher-contacts/teachers/{teacher_id}/contacts/{contact_id}",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID"),
        ("contact_id" = Uuid, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Teacher contact details", body = TeacherContact),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher contact not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Contacts"
)]
#[instrument(skip(state))]
pub async fn get_teacher_contact_by_id(
    State(state): State<AppState>,
    PathParam((teacher_id, contact_id)): PathParam<(TeacherId, ContactId)>,
) -> Result<Json<TeacherContact>, AppError> {
    let key = TeacherContactKey {
        teacher_id,
        contact_id,
    };
    let teacher_contact = state.teacher_contacts.retrieve_by_id(key).await?;

    Ok(Json(teacher_contact))
}

#[utoipa::path(
    put,
    path = "/api/teacher-contacts",
    request_body = TeacherContact,
    responses(
        (status = 200, description = "Teacher contact updated successfully", body = TeacherContact),
        (status = 400, description = "Invalid teacher contact", body = ErrorResponse),
        (status = 404, description = "Teacher contact not found", body = ErrorResponse),
        (status = 423, description = "Teacher contact record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Contacts"
)]
#[instrument(skip(state, teacher_contact))]
pub async fn update_teacher_contact(
    State(state): State<AppState>,
    JsonBody(teacher_contact): JsonBody<Option<TeacherContact>>,
) -> Result<Json<TeacherContact>, AppError> {
    let teacher_contact = state.teacher_contacts.modify(teacher_contact).await?;

    Ok(Json(teacher_contact))
}

#[utoipa::path(
    delete,
    path = "/api/teacher-contacts/teachers/{teacher_id}/contacts/{contact_id}",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID"),
        ("contact_id" = Uuid, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Teacher contact deleted successfully", body = TeacherContact),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher contact not found", body = ErrorResponse),
        (status = 423, description = "Teacher contact record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher Contacts"
)]
#[instrument(skip(state))]
pub async fn delete_teacher_contact(
    State(state): State<AppState>,
    PathParam((teacher_id, contact_id)): PathParam<(TeacherId, ContactId)>,
) -> Result<Json<TeacherContact>, AppError> {
    let key = TeacherContactKey {
        teacher_id,
        contact_id,
    };
    let teacher_contact = state.teacher_contacts.remove_by_id(key).await?;

    Ok(Json(teacher_contact))
}
