use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_teacher_attachment, delete_teacher_attachment, get_teacher_attachment_by_id,
    get_teacher_attachments, update_teacher_attachment,
};

pub fn init_teacher_attachments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_teacher_attachment)
                .get(get_teacher_attachments)
                .put(update_teacher_attachment),
        )
        .route(
            "/teachers/{teacher_id}/attachments/{attachment_id}",
            get(get_teacher_attachment_by_id).delete(delete_teacher_attachment),
        )
}
