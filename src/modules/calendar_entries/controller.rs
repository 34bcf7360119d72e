use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{CalendarEntry, CalendarEntryId};
use tracing::instrument;
use uuid::Uuid;

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// Adds an entry to an existing calendar. `end_date` may equal but never
/// precede `start_date`.
#[utoipa::path(
    post,
    path = "/api/calendar-entries",
    request_body = CalendarEntry,
    responses(
        (status = 201, description = "Calendar entry created successfully", body = CalendarEntry),
        (status = 400, description = "Invalid calendar entry", body = ErrorResponse),
        (status = 409, description = "Calendar entry already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendar Entries"
)]
#[instrument(skip(state, calendar_entry))]
pub async fn create_calendar_entry(
    State(state): State<AppState>,
    JsonBody(calendar_entry): JsonBody<Option<CalendarEntry>>,
) -> Result<(StatusCode, Json<CalendarEntry>), AppError> {
    let calendar_entry = state.calendar_entries.add(calendar_entry).await?;

    Ok((StatusCode::CREATED, Json(calendar_entry)))
}

#[utoipa::path(
    get,
    path = "/api/calendar-entries",
    responses(
        (status = 200, description = "List of calendar entries", body = Vec<CalendarEntry>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendar Entries"
)]
#[instrument(skip(state))]
pub async fn get_calendar_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CalendarEntry>>, AppError> {
    let calendar_entries = state.calendar_entries.retrieve_all().await?;

    Ok(Json(calendar_entries))
}

#[utoipa::path(
    get,
    path = "/api/calendar-entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Calendar entry ID")
    ),
    responses(
        (status = 200, description = "Calendar entry details", body = CalendarEntry),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Calendar entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendar Entries"
)]
#[instrument(skip(state))]
pub async fn get_calendar_entry_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<CalendarEntryId>,
) -> Result<Json<CalendarEntry>, AppError> {
    let calendar_entry = state.calendar_entries.retrieve_by_id(id).await?;

    Ok(Json(calendar_entry))
}

#[utoipa::path(
    put,
    path = "/api/calendar-entries",
    request_body = CalendarEntry,
    responses(
        (status = 200, description = "Calendar entry updated successfully", body = CalendarEntry),
        (status = 400, description = "Invalid calendar entry", body = ErrorResponse),
        (status = 404, description = "Calendar entry not found", body = ErrorResponse),
        (status = 423, description = "Calendar entry record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendar Entries"
)]
#[instrument(skip(state, calendar_entry))]
pub async fn update_calendar_entry(
    State(state): State<AppState>,
    JsonBody(calendar_entry): JsonBody<Option<CalendarEntry>>,
) -> Result<Json<CalendarEntry>, AppError> {
    let calendar_entry = state.calendar_entries.modify(calendar_entry).await?;

    Ok(Json(calendar_entry))
}

#[utoipa::path(
    delete,
    path = "/api/calendar-entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Calendar entry ID")
    ),
    responses(
        (status = 200, description = "Calendar entry deleted successfully", body = CalendarEntry),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Calendar entry not found", body = ErrorResponse),
        (status = 423, description = "Calendar entry record is locked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Calendar Entries"
)]
#[instrument(skip(state))]
pub async fn delete_calendar_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<CalendarEntryId>,
) -> Result<Json<CalendarEntry>, AppError> {
    let calendar_entry = state.calendar_entries.remove_by_id(id).await?;

    Ok(Json(calendar_entry))
}
