// --- File: crates/kurs_registration/src/sync.rs ---
//! Client-side synchronization helpers.
//!
//! Two front-end-facing concerns live here: the optimistic page-state
//! cache that is reconciled against store truth after each mutation, and
//! the one-time migration that drains a local-only store into the durable
//! one. Neither is authoritative; the stores are.

use crate::logic::{CreationOutcome, RegistrationError, RegistrationManager, RegistrationStore};
use kurs_common::{Registration, RegistrationStatus};
use tracing::{debug, info, warn};

/// Non-authoritative snapshot of one user's registrations.
///
/// The UI appends a record optimistically right after a create call, then
/// reconciles against the authoritative list on the next refresh.
#[derive(Debug, Default)]
pub struct RegistrationCache {
    entries: Vec<Registration>,
}

impl RegistrationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Registration] {
        &self.entries
    }

    /// Apply a just-created registration before the store has been
    /// re-read. Replaces any cached record for the same `(user, event)`
    /// pair.
    pub fn apply_optimistic(&mut self, registration: Registration) {
        match self.entries.iter_mut().find(|r| {
            r.user_id == registration.user_id && r.event_id == registration.event_id
        }) {
            Some(slot) => *slot = registration,
            None => self.entries.push(registration),
        }
    }

    /// Replace the snapshot with authoritative store state.
    ///
    /// Authoritative records win per `(user, event)` pair; optimistic
    /// entries whose pair the store has not caught up with yet are kept,
    /// so a record never flickers out of the UI between the create call
    /// and the next successful refresh.
    pub fn reconcile(&mut self, authoritative: Vec<Registration>) {
        let stale = std::mem::take(&mut self.entries);
        self.entries = authoritative;
        for entry in stale {
            let known = self
                .entries
                .iter()
                .any(|r| r.user_id == entry.user_id && r.event_id == entry.event_id);
            if !known {
                debug!(
                    "Keeping optimistic registration {} pending store catch-up",
                    entry.id
                );
                self.entries.push(entry);
            }
        }
    }

    /// Registration status for an event in this snapshot, `None` when the
    /// user has not requested it.
    pub fn status_for_event(&self, event_id: &str) -> Option<RegistrationStatus> {
        self.entries
            .iter()
            .find(|r| r.event_id == event_id)
            .map(|r| r.status)
    }
}

/// Outcome of a local-to-durable migration pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    /// Records newly inserted into the durable store.
    pub migrated: usize,
    /// Records whose `(user, event)` pair already existed.
    pub skipped: usize,
    /// Records that failed to import.
    pub errors: usize,
}

impl MigrationReport {
    pub fn success(&self) -> bool {
        self.errors == 0
    }
}

/// Drain every record of a local-only store into the durable one.
///
/// Idempotent: pairs already present in the durable store are skipped, so
/// re-running a partially failed migration only moves what is missing.
/// Per-record failures are counted and logged, not fatal; only failing to
/// read the local store aborts the pass.
pub async fn migrate_registrations(
    local: &RegistrationStore,
    manager: &RegistrationManager,
) -> Result<MigrationReport, RegistrationError> {
    let local_regs = local.get_all().await?;
    let mut report = MigrationReport::default();

    if local_regs.is_empty() {
        info!("No local registrations to migrate");
        return Ok(report);
    }

    info!("Starting migration of {} local registrations", local_regs.len());
    for reg in local_regs {
        let id = reg.id.clone();
        match manager.import_registration(reg).await {
            Ok(CreationOutcome::Created(_)) => {
                debug!("Migrated registration {}", id);
                report.migrated += 1;
            }
            Ok(CreationOutcome::AlreadyExisted(_)) => {
                debug!("Registration {} already present, skipping", id);
                report.skipped += 1;
            }
            Err(err) => {
                warn!("Failed to migrate registration {}: {}", id, err);
                report.errors += 1;
            }
        }
    }

    info!(
        "Migration completed: {} migrated, {} skipped, {} errors",
        report.migrated, report.skipped, report.errors
    );
    Ok(report)
}
