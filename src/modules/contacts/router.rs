use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_contact, delete_contact, get_contact_by_id, get_contacts, update_contact,
};

pub fn init_contacts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_contact).get(get_contacts).put(update_contact))
        .route("/{id}", get(get_contact_by_id).delete(delete_contact))
}
