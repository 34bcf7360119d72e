use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_attachment, delete_attachment, get_attachment_by_id, get_attachments, update_attachment,
};

pub fn init_attachments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_attachment).get(get_attachments).put(update_attachment))
        .route("/{id}", get(get_attachment_by_id).delete(delete_attachment))
}
