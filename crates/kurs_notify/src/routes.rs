// --- File: crates/kurs_notify/src/routes.rs ---
use crate::handlers::{
    list_user_notifications_handler, mark_all_read_handler, mark_read_handler,
    unread_count_handler, NotifyState,
};
use crate::logic::NotificationEngine;
use axum::{
    routing::{get, put},
    Router,
};
use kurs_registration::RegistrationManager;
use std::sync::Arc;

pub fn routes(engine: Arc<NotificationEngine>, registrations: Arc<RegistrationManager>) -> Router {
    let state = Arc::new(NotifyState {
        engine,
        registrations,
    });

    Router::new()
        .route(
            "/notifications/user/{user_id}",
            get(list_user_notifications_handler),
        )
        .route(
            "/notifications/user/{user_id}/unread-count",
            get(unread_count_handler),
        )
        .route(
            "/notifications/user/{user_id}/read-all",
            put(mark_all_read_handler),
        )
        .route("/notifications/{id}/read", put(mark_read_handler))
        .with_state(state)
}
