use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_exam, delete_exam, get_exam_by_id, get_exams, update_exam};

pub fn init_exams_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_exam).get(get_exams).put(update_exam))
        .route("/{id}", get(get_exam_by_id).delete(delete_exam))
}
