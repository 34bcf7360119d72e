use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_assignment, delete_assignment, get_assignment_by_id, get_assignments, update_assignment,
};

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment).get(get_assignments).put(update_assignment))
        .route("/{id}", get(get_assignment_by_id).delete(delete_assignment))
}
