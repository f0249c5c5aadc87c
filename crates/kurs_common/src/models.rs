// --- File: crates/kurs_common/src/models.rs ---
//! Shared data models.
//!
//! These records cross crate boundaries: the registration crate owns their
//! lifecycle, the notification crate consumes them, and the stores persist
//! them. Wire field names match the collections already in production
//! storage, so existing data round-trips unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status of an event registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Waiting for an admin decision.
    Pending,
    /// Admin approved the request.
    Approved,
    /// Admin rejected the request.
    Rejected,
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationStatus::Pending => write!(f, "pending"),
            RegistrationStatus::Approved => write!(f, "approved"),
            RegistrationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A user's request to attend an event, subject to admin approval.
///
/// At most one registration exists per `(user_id, event_id)` pair; the
/// lifecycle manager enforces this at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Opaque unique identifier, generated at creation. Immutable.
    pub id: String,
    /// Identifier of the requesting user. Immutable.
    pub user_id: String,
    /// Identifier of the target event. Immutable.
    pub event_id: String,
    /// Current position in the approval workflow.
    pub status: RegistrationStatus,
    /// Creation timestamp. Immutable.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent status change.
    pub updated_at: DateTime<Utc>,
}

impl Registration {
    /// Builds a fresh pending registration stamped with `now`.
    pub fn new(user_id: impl Into<String>, event_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("reg-{}", Uuid::new_v4()),
            user_id: user_id.into(),
            event_id: event_id.into(),
            status: RegistrationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An event as delivered by the external catalog provider.
///
/// Only the fields this core consumes are modeled; the catalog may carry
/// more (description, location, tags) and serde ignores them on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CatalogEvent {
    pub id: String,
    pub title: String,
    /// Start date as an ISO-8601 string, exactly as the catalog stores it.
    /// Consumers parse it leniently; see the notification generator.
    pub date: String,
}
