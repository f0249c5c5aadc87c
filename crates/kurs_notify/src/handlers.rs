// File: crates/kurs_notify/src/handlers.rs
use crate::logic::NotificationEngine;
use crate::models::Notification;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use kurs_common::error::error_response;
use kurs_registration::RegistrationManager;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

// Define shared state needed by notification handlers
#[derive(Clone)]
pub struct NotifyState {
    pub engine: Arc<NotificationEngine>,
    pub registrations: Arc<RegistrationManager>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotificationListResponse {
    pub data: Vec<Notification>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnreadCountResponse {
    pub data: usize,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotifySuccessResponse {
    pub success: bool,
}

/// Handler for a user's notifications, newest first.
///
/// Runs a generation pass first, so clients polling on page load pick up
/// reminders that became due; repeat calls within a day create nothing new.
#[axum::debug_handler]
pub async fn list_user_notifications_handler(
    State(state): State<Arc<NotifyState>>,
    Path(user_id): Path<String>,
) -> Result<Json<NotificationListResponse>, (StatusCode, String)> {
    let registrations = state
        .registrations
        .list_by_user(&user_id)
        .await
        .map_err(error_response)?;

    let created = state
        .engine
        .evaluate(&user_id, &registrations)
        .await
        .map_err(error_response)?;
    if !created.is_empty() {
        debug!("Generation pass created {} notifications", created.len());
    }

    let data = state
        .engine
        .list_for_user(&user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(NotificationListResponse { data }))
}

/// Handler for the unread badge count.
#[axum::debug_handler]
pub async fn unread_count_handler(
    State(state): State<Arc<NotifyState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UnreadCountResponse>, (StatusCode, String)> {
    let data = state
        .engine
        .unread_count(&user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(UnreadCountResponse { data }))
}

/// Handler to mark one notification read. Unknown ids are a no-op success.
#[axum::debug_handler]
pub async fn mark_read_handler(
    State(state): State<Arc<NotifyState>>,
    Path(id): Path<String>,
) -> Result<Json<NotifySuccessResponse>, (StatusCode, String)> {
    state.engine.mark_as_read(&id).await.map_err(error_response)?;
    Ok(Json(NotifySuccessResponse { success: true }))
}

/// Handler to mark every notification of a user read.
#[axum::debug_handler]
pub async fn mark_all_read_handler(
    State(state): State<Arc<NotifyState>>,
    Path(user_id): Path<String>,
) -> Result<Json<NotifySuccessResponse>, (StatusCode, String)> {
    state
        .engine
        .mark_all_as_read(&user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(NotifySuccessResponse { success: true }))
}
