// --- File: crates/kurs_notify/src/logic.rs ---
//! Notification generator.
//!
//! Derives reminders from (approved registrations × event dates) at
//! calendar-day granularity, deduplicates on `(user, event, kind)`, and
//! prunes by age. Not a scheduler: the caller drives cadence, and running
//! any number of times per day is safe.

use crate::models::{Notification, ReminderKind};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use kurs_common::services::Clock;
use kurs_common::{
    BoxedError, CatalogEvent, EventCatalogProvider, KursError, Registration, RegistrationStatus,
};
use kurs_config::{NotificationsConfig, ReminderPolicy};
use kurs_store::{CollectionStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Store holding the notification collection.
pub type NotificationStore = CollectionStore<Notification>;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification store error: {0}")]
    Store(#[from] StoreError),
    #[error("Event catalog error: {0}")]
    Catalog(#[from] BoxedError),
}

impl From<NotifyError> for KursError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::Store(e) => e.into(),
            NotifyError::Catalog(e) => KursError::PersistenceError(e.to_string()),
        }
    }
}

/// The notification generator.
pub struct NotificationEngine {
    store: Arc<NotificationStore>,
    catalog: Arc<dyn EventCatalogProvider<Error = BoxedError>>,
    clock: Arc<dyn Clock>,
    policy: ReminderPolicy,
    retention: Duration,
}

impl NotificationEngine {
    pub fn new(
        store: Arc<NotificationStore>,
        catalog: Arc<dyn EventCatalogProvider<Error = BoxedError>>,
        clock: Arc<dyn Clock>,
        config: &NotificationsConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            clock,
            policy: config.reminder_policy,
            retention: Duration::days(config.retention_days),
        }
    }

    /// Run one generation pass for `user_id`.
    ///
    /// Purges expired notifications (globally, not just this user's),
    /// derives due reminders from the approved registrations in
    /// `registrations`, and persists the new ones in one batch write.
    /// Returns only the newly created notifications.
    ///
    /// Registrations whose event is missing from the catalog, or whose
    /// event date does not parse, are stale references: skipped, never an
    /// error.
    pub async fn evaluate(
        &self,
        user_id: &str,
        registrations: &[Registration],
    ) -> Result<Vec<Notification>, NotifyError> {
        let today = self.clock.now().date_naive();

        // Resolve the catalog outside the store's writer lock; only the
        // read-modify-write below needs it.
        let mut candidates: Vec<(CatalogEvent, i64)> = Vec::new();
        for reg in registrations
            .iter()
            .filter(|r| r.status == RegistrationStatus::Approved)
        {
            let Some(event) = self.catalog.find_event(&reg.event_id).await? else {
                debug!(
                    "Event {} no longer in catalog, skipping stale registration {}",
                    reg.event_id, reg.id
                );
                continue;
            };
            let Some(event_date) = parse_event_date(&event.date) else {
                debug!(
                    "Event {} has unparseable date '{}', skipping",
                    event.id, event.date
                );
                continue;
            };

            // Both sides truncated to midnight, so time of day never
            // shifts the count.
            let days_until = (event_date - today).num_days();
            if !(0..=10).contains(&days_until) {
                continue;
            }
            candidates.push((event, days_until));
        }

        let now = self.clock.now();
        let cutoff = now - self.retention;
        let policy = self.policy;

        let created = self
            .store
            .update(|items| {
                let before = items.len();
                items.retain(|n| n.created_at > cutoff);
                let purged = before - items.len();
                if purged > 0 {
                    debug!("Purged {} expired notifications", purged);
                }
                let mut changed = purged > 0;

                let mut created = Vec::new();
                for (event, days_until) in candidates {
                    for kind in candidate_kinds(policy, days_until) {
                        let blocked = items.iter().any(|n| {
                            n.user_id == user_id
                                && n.event_id == event.id
                                && match policy {
                                    ReminderPolicy::ExactDay => n.kind == kind,
                                    // An equally or more urgent reminder
                                    // already covers this event.
                                    ReminderPolicy::CatchUp => {
                                        n.kind.threshold_days() <= kind.threshold_days()
                                    }
                                }
                        });
                        if !blocked {
                            let notification = Notification::new(user_id, &event, kind, now);
                            items.push(notification.clone());
                            created.push(notification);
                            changed = true;
                        }
                    }
                }
                (created, changed)
            })
            .await?;

        if !created.is_empty() {
            info!(
                "Created {} notifications for user {}",
                created.len(),
                user_id
            );
        }
        Ok(created)
    }

    /// The user's notifications, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, NotifyError> {
        let mut items: Vec<Notification> = self
            .store
            .get_all()
            .await?
            .into_iter()
            .filter(|n| n.user_id == user_id)
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    /// Number of unread notifications for the user.
    pub async fn unread_count(&self, user_id: &str) -> Result<usize, NotifyError> {
        let items = self.store.get_all().await?;
        Ok(items
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count())
    }

    /// Flip one notification to read. No-op when the id is unknown or the
    /// notification is already read.
    pub async fn mark_as_read(&self, notification_id: &str) -> Result<(), NotifyError> {
        self.store
            .update(|items| {
                match items.iter_mut().find(|n| n.id == notification_id) {
                    Some(n) if !n.read => {
                        n.read = true;
                        ((), true)
                    }
                    Some(_) => ((), false),
                    None => {
                        debug!("Notification {} not found, nothing to mark", notification_id);
                        ((), false)
                    }
                }
            })
            .await?;
        Ok(())
    }

    /// Flip every notification belonging to `user_id` to read. Other
    /// users' read state is untouched.
    pub async fn mark_all_as_read(&self, user_id: &str) -> Result<(), NotifyError> {
        self.store
            .update(|items| {
                let mut changed = false;
                for n in items.iter_mut().filter(|n| n.user_id == user_id && !n.read) {
                    n.read = true;
                    changed = true;
                }
                ((), changed)
            })
            .await?;
        Ok(())
    }

    /// Drop every notification for `(user_id, event_id)`. Used when a
    /// registration is discarded.
    pub async fn delete_for_event(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<(), NotifyError> {
        self.store
            .update(|items| {
                let before = items.len();
                items.retain(|n| !(n.user_id == user_id && n.event_id == event_id));
                ((), items.len() != before)
            })
            .await?;
        Ok(())
    }
}

/// Which kinds a registration at `days_until` may fire, most urgent first.
pub(crate) fn candidate_kinds(policy: ReminderPolicy, days_until: i64) -> Vec<ReminderKind> {
    match policy {
        // Fire on the exact day only; any other count produces nothing.
        ReminderPolicy::ExactDay => ReminderKind::from_exact_days(days_until)
            .into_iter()
            .collect(),
        // Fire once the threshold is crossed, so a reminder missed while
        // the evaluator was not running still goes out.
        ReminderPolicy::CatchUp => ReminderKind::ALL
            .iter()
            .copied()
            .filter(|kind| days_until <= kind.threshold_days())
            .collect(),
    }
}

/// Lenient ISO-8601 date extraction.
///
/// The catalog stores dates as strings and is not strict about the shape:
/// full RFC 3339, a naive datetime, or a bare date all occur.
pub(crate) fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
