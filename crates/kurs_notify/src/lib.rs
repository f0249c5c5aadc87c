// --- File: crates/kurs_notify/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod routes;

pub use handlers::NotifyState;
pub use logic::{NotificationEngine, NotificationStore, NotifyError};
pub use models::{Notification, ReminderKind};
pub use routes::routes;
