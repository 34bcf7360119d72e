use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_course_attachment, delete_course_attachment, get_course_attachment_by_id,
    get_course_attachments, update_course_attachment,
};

pub fn init_course_attachments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_course_attachment)
                .get(get_course_attachments)
                .put(update_course_attachment),
        )
        .route(
            "/courses/{course_id}/attachments/{attachment_id}",
            get(get_course_attachment_by_id).delete(delete_course_attachment),
        )
}
