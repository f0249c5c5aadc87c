// --- File: crates/kurs_registration/src/logic.rs ---
//! Registration lifecycle manager.
//!
//! Enforces the one-record-per-`(user, event)` invariant, the pending →
//! approved/rejected workflow, and nothing else: whether the user or event
//! actually exists is the caller's responsibility, and admin authorization
//! happens outside this core.

use kurs_common::services::Clock;
use kurs_common::{KursError, Registration, RegistrationStatus};
use kurs_store::{CollectionStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Store holding the registration collection.
pub type RegistrationStore = CollectionStore<Registration>;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Registration store error: {0}")]
    Store(#[from] StoreError),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

impl From<RegistrationError> for KursError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Store(e) => e.into(),
            RegistrationError::EmptyField(_) => KursError::ValidationError(err.to_string()),
        }
    }
}

/// Result of a creation attempt.
///
/// Creation is idempotent, so callers that care whether the returned record
/// is fresh (e.g. to pick UI feedback) get that distinction here instead of
/// guessing from timestamps.
#[derive(Debug, Clone)]
pub enum CreationOutcome {
    /// A new pending registration was persisted.
    Created(Registration),
    /// A registration for this `(user, event)` pair already existed; it is
    /// returned unchanged, whatever its status.
    AlreadyExisted(Registration),
}

impl CreationOutcome {
    pub fn registration(&self) -> &Registration {
        match self {
            CreationOutcome::Created(reg) | CreationOutcome::AlreadyExisted(reg) => reg,
        }
    }

    pub fn into_registration(self) -> Registration {
        match self {
            CreationOutcome::Created(reg) | CreationOutcome::AlreadyExisted(reg) => reg,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, CreationOutcome::Created(_))
    }
}

/// The registration lifecycle manager.
///
/// All mutations run as one read-modify-write cycle under the store's
/// writer lock; persistence failures propagate unmodified.
pub struct RegistrationManager {
    store: Arc<RegistrationStore>,
    clock: Arc<dyn Clock>,
}

impl RegistrationManager {
    pub fn new(store: Arc<RegistrationStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Request a registration for `(user_id, event_id)`.
    ///
    /// Idempotent: if a registration for the pair already exists it is
    /// returned unchanged regardless of its status, and nothing is written.
    /// Otherwise a new record is persisted with `Pending` status.
    pub async fn create_registration(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<CreationOutcome, RegistrationError> {
        if user_id.is_empty() {
            return Err(RegistrationError::EmptyField("user_id"));
        }
        if event_id.is_empty() {
            return Err(RegistrationError::EmptyField("event_id"));
        }

        let candidate = Registration::new(user_id, event_id, self.clock.now());
        let outcome = self
            .store
            .update(|regs| {
                if let Some(existing) = regs
                    .iter()
                    .find(|r| r.user_id == user_id && r.event_id == event_id)
                {
                    debug!(
                        "Registration for user {} and event {} already exists ({})",
                        user_id, event_id, existing.id
                    );
                    (CreationOutcome::AlreadyExisted(existing.clone()), false)
                } else {
                    regs.push(candidate.clone());
                    (CreationOutcome::Created(candidate), true)
                }
            })
            .await?;

        if outcome.was_created() {
            info!(
                "Created registration {} for user {} and event {}",
                outcome.registration().id,
                user_id,
                event_id
            );
        }
        Ok(outcome)
    }

    /// Insert a fully formed record, preserving its id, status and
    /// timestamps. Used by the local-to-durable migration; idempotent on
    /// the `(user, event)` pair like [`Self::create_registration`].
    pub async fn import_registration(
        &self,
        record: Registration,
    ) -> Result<CreationOutcome, RegistrationError> {
        if record.user_id.is_empty() {
            return Err(RegistrationError::EmptyField("user_id"));
        }
        if record.event_id.is_empty() {
            return Err(RegistrationError::EmptyField("event_id"));
        }

        self.store
            .update(|regs| {
                if let Some(existing) = regs
                    .iter()
                    .find(|r| r.user_id == record.user_id && r.event_id == record.event_id)
                {
                    (CreationOutcome::AlreadyExisted(existing.clone()), false)
                } else {
                    regs.push(record.clone());
                    (CreationOutcome::Created(record), true)
                }
            })
            .await
            .map_err(Into::into)
    }

    /// All registrations belonging to `user_id`. No ordering guarantee.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Registration>, RegistrationError> {
        let regs = self.store.get_all().await?;
        Ok(regs.into_iter().filter(|r| r.user_id == user_id).collect())
    }

    /// Every registration, for the admin approval queue. No pagination;
    /// the expected scale is tens to low thousands of records.
    pub async fn list_all(&self) -> Result<Vec<Registration>, RegistrationError> {
        Ok(self.store.get_all().await?)
    }

    /// Approved registrations only, for the admin calendar view.
    pub async fn list_approved(&self) -> Result<Vec<Registration>, RegistrationError> {
        let regs = self.store.get_all().await?;
        Ok(regs
            .into_iter()
            .filter(|r| r.status == RegistrationStatus::Approved)
            .collect())
    }

    /// Apply an admin decision to a registration.
    ///
    /// Overwrites the status and bumps `updated_at` whatever the prior
    /// status was: re-approving is a timestamp-only change, and an admin
    /// can reverse a decision by issuing the opposite status. Returns
    /// `None` when the id is unknown.
    pub async fn update_status(
        &self,
        registration_id: &str,
        status: RegistrationStatus,
    ) -> Result<Option<Registration>, RegistrationError> {
        let now = self.clock.now();
        let updated = self
            .store
            .update(|regs| match regs.iter_mut().find(|r| r.id == registration_id) {
                Some(reg) => {
                    reg.status = status;
                    reg.updated_at = now;
                    (Some(reg.clone()), true)
                }
                None => (None, false),
            })
            .await?;

        match &updated {
            Some(reg) => info!("Registration {} set to {}", reg.id, reg.status),
            None => debug!("Registration {} not found for status update", registration_id),
        }
        Ok(updated)
    }

    /// Remove a registration unconditionally.
    ///
    /// Idempotent: deleting an unknown id is a success. The returned flag
    /// says whether a record was actually removed.
    pub async fn delete_registration(
        &self,
        registration_id: &str,
    ) -> Result<bool, RegistrationError> {
        let removed = self
            .store
            .update(|regs| {
                let before = regs.len();
                regs.retain(|r| r.id != registration_id);
                let removed = regs.len() != before;
                (removed, removed)
            })
            .await?;

        if removed {
            info!("Deleted registration {}", registration_id);
        }
        Ok(removed)
    }
}
