// --- File: crates/kurs_notify/src/models.rs ---
use chrono::{DateTime, Utc};
use kurs_common::CatalogEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reminder lead time.
///
/// Serialized as the wire strings existing collections already use
/// (`10_days`, `3_days`, `1_day`), so stored data round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ReminderKind {
    #[serde(rename = "10_days")]
    TenDays,
    #[serde(rename = "3_days")]
    ThreeDays,
    #[serde(rename = "1_day")]
    OneDay,
}

impl ReminderKind {
    /// Every kind, most urgent first.
    pub const ALL: [ReminderKind; 3] = [
        ReminderKind::OneDay,
        ReminderKind::ThreeDays,
        ReminderKind::TenDays,
    ];

    /// The day count this reminder is about.
    pub fn threshold_days(self) -> i64 {
        match self {
            ReminderKind::TenDays => 10,
            ReminderKind::ThreeDays => 3,
            ReminderKind::OneDay => 1,
        }
    }

    /// The kind that fires on exactly `days` calendar days before the
    /// event, if any.
    pub fn from_exact_days(days: i64) -> Option<Self> {
        match days {
            10 => Some(ReminderKind::TenDays),
            3 => Some(ReminderKind::ThreeDays),
            1 => Some(ReminderKind::OneDay),
            _ => None,
        }
    }

    /// Reminder text shown to the user.
    pub fn message(self, event_title: &str) -> String {
        match self {
            ReminderKind::TenDays => {
                format!("Через 10 дней начнется событие \"{}\"", event_title)
            }
            ReminderKind::ThreeDays => {
                format!("Через 3 дня начнется событие \"{}\"", event_title)
            }
            ReminderKind::OneDay => format!("Завтра начнется событие \"{}\"", event_title),
        }
    }
}

/// A reminder derived from an approved registration's proximity to its
/// event date.
///
/// Title and date are a snapshot taken at generation time; they are not
/// re-synced if the catalog entry changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub event_title: String,
    pub event_date: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Builds an unread notification for `user_id` from a catalog snapshot.
    pub fn new(
        user_id: impl Into<String>,
        event: &CatalogEvent,
        kind: ReminderKind,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("notif-{}", Uuid::new_v4()),
            user_id: user_id.into(),
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            event_date: event.date.clone(),
            kind,
            message: kind.message(&event.title),
            read: false,
            created_at: now,
        }
    }
}
