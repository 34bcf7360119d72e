use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_teacher, delete_teacher, get_teacher_by_id, get_teachers, update_teacher,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher).get(get_teachers).put(update_teacher))
        .route("/{id}", get(get_teacher_by_id).delete(delete_teacher))
}
