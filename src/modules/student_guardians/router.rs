use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_student_guardian, delete_student_guardian, get_student_guardian_by_id,
    get_student_guardians, update_student_guardian,
};

pub fn init_student_guardians_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_student_guardian).get(get_student_guardians).put(update_student_guardian),
        )
        .route(
            "/students/{student_id}/guardians/{guardian_id}",
            get(get_student_guardian_by_id).delete(delete_student_guardian),
        )
}
