use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_exam_attachment, delete_exam_attachment, get_exam_attachment_by_id, get_exam_attachments,
    update_exam_attachment,
};

pub fn init_exam_attachments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_exam_attachment).get(get_exam_attachments).put(update_exam_attachment),
        )
        .route(
            "/exams/{exam_id}/attachments/{attachment_id}",
            get(get_exam_attachment_by_id).delete(delete_exam_attachment),
        )
}
