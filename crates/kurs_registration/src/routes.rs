// --- File: crates/kurs_registration/src/routes.rs ---
use crate::handlers::{
    create_registration_handler, delete_registration_handler,
    list_approved_registrations_handler, list_registrations_handler,
    list_user_registrations_handler, update_registration_status_handler, RegistrationState,
};
use crate::logic::RegistrationManager;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub fn routes(manager: Arc<RegistrationManager>) -> Router {
    let state = Arc::new(RegistrationState { manager });

    Router::new()
        .route(
            "/registrations",
            post(create_registration_handler).get(list_registrations_handler),
        )
        .route(
            "/registrations/approved",
            get(list_approved_registrations_handler),
        )
        .route(
            "/registrations/user/{user_id}",
            get(list_user_registrations_handler),
        )
        .route(
            "/registrations/{id}",
            put(update_registration_status_handler).delete(delete_registration_handler),
        )
        .with_state(state)
}
