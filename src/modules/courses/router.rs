use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_course, delete_course, get_course_by_id, get_courses, update_course};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).get(get_courses).put(update_course))
        .route("/{id}", get(get_course_by_id).delete(delete_course))
}
