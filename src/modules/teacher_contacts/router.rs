use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_teacher_contact, delete_teacher_contact, get_teacher_contact_by_id,
    get_teacher_contacts, update_teacher_contact,
};

pub fn init_teacher_contacts_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_teacher_contact)
                .get(get_teacher_contacts)
                .put(update_teacher_contact),
        )
        .route(
            "/teachers/{teacher_id}/contacts/{contact_id}",
            get(get_teacher_contact_by_id).delete(delete_teacher_contact),
        )
}
