// --- File: crates/kurs_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via KURS_DATABASE__URL
}

// --- Reminder Policy ---
/// Which firing rule the notification generator applies.
///
/// `ExactDay` fires a reminder only when the day count matches a
/// threshold exactly, so the generator must run on that calendar day.
/// `CatchUp` also fires when the threshold was crossed while the
/// generator was not running, as long as no equally or more urgent
/// reminder exists for the event yet.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReminderPolicy {
    #[default]
    ExactDay,
    CatchUp,
}

// --- Notifications Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Notifications older than this many days are purged on each
    /// generation pass.
    pub retention_days: i64,
    pub reminder_policy: ReminderPolicy,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            retention_days: 30,
            reminder_policy: ReminderPolicy::default(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Durable store location. When absent the service runs on the
    /// in-memory backend only (local mode).
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}
