// File: crates/kurs_notify/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{NotificationListResponse, NotifySuccessResponse, UnreadCountResponse};
use crate::models::{Notification, ReminderKind};

#[utoipa::path(
    get,
    path = "/notifications/user/{user_id}",
    params(
        ("user_id" = String, Path, description = "The notification owner's id")
    ),
    responses(
        (status = 200, description = "The user's notifications, newest first (a generation pass runs first)", body = NotificationListResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Notifications"
)]
fn doc_list_user_notifications_handler() {}

#[utoipa::path(
    get,
    path = "/notifications/user/{user_id}/unread-count",
    params(
        ("user_id" = String, Path, description = "The notification owner's id")
    ),
    responses(
        (status = 200, description = "Number of unread notifications", body = UnreadCountResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Notifications"
)]
fn doc_unread_count_handler() {}

#[utoipa::path(
    put,
    path = "/notifications/{id}/read",
    params(
        ("id" = String, Path, description = "The notification id")
    ),
    responses(
        (status = 200, description = "Notification marked read (unknown ids are a no-op)", body = NotifySuccessResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Notifications"
)]
fn doc_mark_read_handler() {}

#[utoipa::path(
    put,
    path = "/notifications/user/{user_id}/read-all",
    params(
        ("user_id" = String, Path, description = "The notification owner's id")
    ),
    responses(
        (status = 200, description = "Every notification of the user marked read", body = NotifySuccessResponse),
        (status = 500, description = "Persistence failed")
    ),
    tag = "Notifications"
)]
fn doc_mark_all_read_handler() {}

/// OpenAPI documentation for the notification API
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_user_notifications_handler,
        doc_unread_count_handler,
        doc_mark_read_handler,
        doc_mark_all_read_handler
    ),
    components(
        schemas(
            NotificationListResponse,
            UnreadCountResponse,
            NotifySuccessResponse,
            Notification,
            ReminderKind
        )
    ),
    tags(
        (name = "Notifications", description = "Event reminder generation and read state")
    ),
    servers(
        (url = "/api", description = "Main API Prefix")
    )
)]
pub struct NotifyApiDoc;
