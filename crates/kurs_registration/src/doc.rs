// File: crates/kurs_registration/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{
    CreateRegistrationRequest, DeleteRegistrationResponse, RegistrationListResponse,
    RegistrationResponse, UpdateStatusRequest,
};
use kurs_common::{Registration, RegistrationStatus};

#[utoipa::path(
    post,
    path = "/registrations",
    request_body(content = CreateRegistrationRequest, example = json!({
        "userId": "u-42",
        "eventId": "ev-highload-2026"
    })),
    responses(
        (status = 200, description = "Registration created or already existing", body = RegistrationResponse),
        (status = 400, description = "Empty userId or eventId"),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Registrations"
)]
fn doc_create_registration_handler() {}

#[utoipa::path(
    get,
    path = "/registrations",
    responses(
        (status = 200, description = "Every registration (admin approval queue)", body = RegistrationListResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Registrations"
)]
fn doc_list_registrations_handler() {}

#[utoipa::path(
    get,
    path = "/registrations/approved",
    responses(
        (status = 200, description = "Approved registrations (admin calendar view)", body = RegistrationListResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Registrations"
)]
fn doc_list_approved_registrations_handler() {}

#[utoipa::path(
    get,
    path = "/registrations/user/{user_id}",
    params(
        ("user_id" = String, Path, description = "The requesting user's id")
    ),
    responses(
        (status = 200, description = "The user's registrations", body = RegistrationListResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Registrations"
)]
fn doc_list_user_registrations_handler() {}

#[utoipa::path(
    put,
    path = "/registrations/{id}",
    params(
        ("id" = String, Path, description = "The registration id")
    ),
    request_body(content = UpdateStatusRequest, example = json!({
        "status": "approved"
    })),
    responses(
        (status = 200, description = "Updated registration", body = RegistrationResponse),
        (status = 404, description = "Registration not found"),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Registrations"
)]
fn doc_update_registration_status_handler() {}

#[utoipa::path(
    delete,
    path = "/registrations/{id}",
    params(
        ("id" = String, Path, description = "The registration id")
    ),
    responses(
        (status = 200, description = "Registration removed (or was already gone)", body = DeleteRegistrationResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Registrations"
)]
fn doc_delete_registration_handler() {}

/// OpenAPI documentation for the registration API
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_registration_handler,
        doc_list_registrations_handler,
        doc_list_approved_registrations_handler,
        doc_list_user_registrations_handler,
        doc_update_registration_status_handler,
        doc_delete_registration_handler
    ),
    components(
        schemas(
            CreateRegistrationRequest,
            RegistrationResponse,
            RegistrationListResponse,
            UpdateStatusRequest,
            DeleteRegistrationResponse,
            Registration,
            RegistrationStatus
        )
    ),
    tags(
        (name = "Registrations", description = "Event registration lifecycle and approval workflow")
    ),
    servers(
        (url = "/api", description = "Main API Prefix")
    )
)]
pub struct RegistrationApiDoc;
