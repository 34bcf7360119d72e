use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_calendar, delete_calendar, get_calendar_by_id, get_calendars, update_calendar,
};

pub fn init_calendars_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_calendar).get(get_calendars).put(update_calendar))
        .route("/{id}", get(get_calendar_by_id).delete(delete_calendar))
}
