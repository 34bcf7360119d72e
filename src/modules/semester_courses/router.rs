use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_semester_course, delete_semester_course, get_semester_course_by_id,
    get_semester_courses, update_semester_course,
};

pub fn init_semester_courses_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_semester_course)
                .get(get_semester_courses)
                .put(update_semester_course),
        )
        .route(
            "/{id}",
            get(get_semester_course_by_id).delete(delete_semester_course),
        )
}
