use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Contact, ContactId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = Contact,
    responses(
        (status = 201, description = "Contact created successfully", body = Contact),
        (status = 400, description = "Invalid contact", body = ErrorResponse),
        (status = 409, description = "Contact already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
#[instrument(skip(state, contact))]
pub async fn create_contact(
    State(state): State<AppState>,
    JsonBody(contact): JsonBody<Option<Contact>>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let contact = state.contacts.add(contact).await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "List of contacts", body = Vec<Contact>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn get_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state.contacts.retrieve_all().await?;

    Ok(Json(contacts))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(
        ("id" = Uuid, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact details", body = Contact),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn get_contact_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<ContactId>,
) -> Result<Json<Contact>, AppError> {
    let contact = state.contacts.retrieve_by_id(id).await?;

    Ok(Json(contact))
}

#[utoipa::path(
    put,
    path = "/api/contacts",
    request_body = Contact,
    responses(
        (status = 200, description = "Contact updated successfully", body = Contact),
        (status = 400, description = "Invalid contact", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 423, description = "Contact record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
#[instrument(skip(state, contact))]
pub async fn update_contact(
    State(state): State<AppState>,
    JsonBody(contact): JsonBody<Option<Contact>>,
) -> Result<Json<Contact>, AppError> {
    let contact = state.contacts.modify(contact).await?;

    Ok(Json(contact))
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(
        ("id" = Uuid, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact deleted successfully", body = Contact),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 423, description = "Contact record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<AppState>,
    PathParam(id): PathParam<ContactId>,
) -> Result<Json<Contact>, AppError> {
    let contact = state.contacts.remove_by_id(id).await?;

    Ok(Json(contact))
}
