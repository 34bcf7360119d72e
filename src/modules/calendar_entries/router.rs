use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_calendar_entry, delete_calendar_entry, get_calendar_entry_by_id, get_calendar_entries,
    update_calendar_entry,
};

pub fn init_calendar_entries_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_calendar_entry).get(get_calendar_entries).put(update_calendar_entry),
        )
        .route("/{id}", get(get_calendar_entry_by_id).delete(delete_calendar_entry))
}
