// --- File: crates/kurs_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the collaborators the core
//! depends on: the event catalog and the wall clock. These traits allow for
//! dependency injection and easier testing by decoupling the registration
//! and notification logic from concrete implementations.

use crate::models::CatalogEvent;
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the read-only event catalog collaborator.
///
/// The catalog is owned by the surrounding application; the core only ever
/// resolves events by id when deriving reminders. A missing event is a
/// normal outcome (`Ok(None)`), not an error.
pub trait EventCatalogProvider: Send + Sync {
    /// Error type returned by catalog operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve a single event by its id.
    fn find_event(&self, event_id: &str) -> BoxFuture<'_, Option<CatalogEvent>, Self::Error>;

    /// List every event currently in the catalog.
    fn list_events(&self) -> BoxFuture<'_, Vec<CatalogEvent>, Self::Error>;
}

/// A source of "now".
///
/// All timestamp stamping and day-count arithmetic goes through this trait
/// so tests can pin or advance the clock deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for deterministic tests.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward by the given duration.
    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().expect("clock poisoned");
        *now = *now + by;
    }

    /// Pins the clock to the given instant.
    pub fn set(&self, to: DateTime<Utc>) {
        let mut now = self.now.lock().expect("clock poisoned");
        *now = to;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock poisoned")
    }
}
