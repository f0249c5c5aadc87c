// File: crates/kurs_registration/src/handlers.rs
use crate::logic::RegistrationManager;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use kurs_common::error::error_response;
use kurs_common::{Registration, RegistrationStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// Define shared state needed by registration handlers
#[derive(Clone)]
pub struct RegistrationState {
    pub manager: Arc<RegistrationManager>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub user_id: String,
    pub event_id: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegistrationResponse {
    pub data: Registration,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegistrationListResponse {
    pub data: Vec<Registration>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateStatusRequest {
    pub status: RegistrationStatus,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteRegistrationResponse {
    pub success: bool,
}

/// Handler to request a registration.
///
/// Idempotent: posting the same `(userId, eventId)` pair again returns the
/// existing record with a 200, exactly like a fresh creation.
#[axum::debug_handler]
pub async fn create_registration_handler(
    State(state): State<Arc<RegistrationState>>,
    Json(payload): Json<CreateRegistrationRequest>,
) -> Result<Json<RegistrationResponse>, (StatusCode, String)> {
    let outcome = state
        .manager
        .create_registration(&payload.user_id, &payload.event_id)
        .await
        .map_err(error_response)?;

    if !outcome.was_created() {
        debug!(
            "Returning pre-existing registration {} for user {}",
            outcome.registration().id,
            payload.user_id
        );
    }
    Ok(Json(RegistrationResponse {
        data: outcome.into_registration(),
    }))
}

/// Handler for the admin approval queue: every registration.
#[axum::debug_handler]
pub async fn list_registrations_handler(
    State(state): State<Arc<RegistrationState>>,
) -> Result<Json<RegistrationListResponse>, (StatusCode, String)> {
    let data = state.manager.list_all().await.map_err(error_response)?;
    Ok(Json(RegistrationListResponse { data }))
}

/// Handler for one user's registrations.
#[axum::debug_handler]
pub async fn list_user_registrations_handler(
    State(state): State<Arc<RegistrationState>>,
    Path(user_id): Path<String>,
) -> Result<Json<RegistrationListResponse>, (StatusCode, String)> {
    let data = state
        .manager
        .list_by_user(&user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(RegistrationListResponse { data }))
}

/// Handler for the admin calendar view: approved registrations only.
#[axum::debug_handler]
pub async fn list_approved_registrations_handler(
    State(state): State<Arc<RegistrationState>>,
) -> Result<Json<RegistrationListResponse>, (StatusCode, String)> {
    let data = state.manager.list_approved().await.map_err(error_response)?;
    Ok(Json(RegistrationListResponse { data }))
}

/// Handler for an admin decision on a registration.
#[axum::debug_handler]
pub async fn update_registration_status_handler(
    State(state): State<Arc<RegistrationState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<RegistrationResponse>, (StatusCode, String)> {
    match state
        .manager
        .update_status(&id, payload.status)
        .await
        .map_err(error_response)?
    {
        Some(data) => Ok(Json(RegistrationResponse { data })),
        None => Err((
            StatusCode::NOT_FOUND,
            "Registration not found".to_string(),
        )),
    }
}

/// Handler to discard a registration. Deleting an unknown id still
/// reports success.
#[axum::debug_handler]
pub async fn delete_registration_handler(
    State(state): State<Arc<RegistrationState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRegistrationResponse>, (StatusCode, String)> {
    state
        .manager
        .delete_registration(&id)
        .await
        .map_err(error_response)?;
    Ok(Json(DeleteRegistrationResponse { success: true }))
}
