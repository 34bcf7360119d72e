use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{Calendar, CalendarId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/calendars",
    request_body = Calendar,
    responses(
        (status = 201, description = "Calendar created successfully", body = Calendar),
        (status = 400, description = "Invalid calendar", body = ErrorResponse),
        (status = 409, description = "Calendar already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendars"
)]
#[instrument(skip(state, calendar))]
pub async fn create_calendar(
    State(state): State<AppState>,
    JsonBody(calendar): JsonBody<Option<Calendar>>,
) -> Result<(StatusCode, Json<Calendar>), AppError> {
    let calendar = state.calendars.add(calendar).await?;

    Ok((StatusCode::CREATED, Json(calendar)))
}

#[utoipa::path(
    get,
    path = "/api/calendars",
    responses(
        (status = 200, description = "List of calendars", body = Vec<Calendar>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendars"
)]
#[instrument(skip(state))]
pub async fn get_calendars(State(state): State<AppState>) -> Result<Json<Vec<Calendar>>, AppError> {
    let calendars = state.calendars.retrieve_all().await?;

    Ok(Json(calendars))
}

#[utoipa::path(
    get,
    path = "/api/calendars/{id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID")
    ),
    responses(
        (status = 200, description = "Calendar details", body = Calendar),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Calendar not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendars"
)]
#[instrument(skip(state))]
pub async fn get_calendar_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<CalendarId>,
) -> Result<Json<Calendar>, AppError> {
    let calendar = state.calendars.retrieve_by_id(id).await?;

    Ok(Json(calendar))
}

#[utoipa::path(
    put,
    path = "/api/calendars",
    request_body = Calendar,
    responses(
        (status = 200, description = "Calendar updated successfully", body = Calendar),
        (status = 400, description = "Invalid calendar", body = ErrorResponse),
        (status = 404, description = "Calendar not found", body = ErrorResponse),
        (status = 423, description = "Calendar record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendars"
)]
#[instrument(skip(state, calendar))]
pub async fn update_calendar(
    State(state): State<AppState>,
    JsonBody(calendar): JsonBody<Option<Calendar>>,
) -> Result<Json<Calendar>, AppError> {
    let calendar = state.calendars.modify(calendar).await?;

    Ok(Json(calendar))
}

#[utoipa::path(
    delete,
    path = "/api/calendars/{id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID")
    ),
    responses(
        (status = 200, description = "Calendar deleted successfully", body = Calendar),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Calendar not found", body = ErrorResponse),
        (status = 423, description = "Calendar record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendars"
)]
#[instrument(skip(state))]
pub async fn delete_calendar(
    State(state): State<AppState>,
    PathParam(id): PathParam<CalendarId>,
) -> Result<Json<Calendar>, AppError> {
    let calendar = state.calendars.remove_by_id(id).await?;

    Ok(Json(calendar))
}
