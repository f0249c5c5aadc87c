//! The key-value persistence boundary.
//!
//! Each logical collection lives under one key as one JSON document: the
//! full registration list is one durable record, the notification list
//! another. Anything that can read and write such a record satisfies the
//! contract; the two shipped backends are the durable SQL one
//! ([`crate::KvClient`]) and the local-only in-memory one
//! ([`crate::MemoryKvBackend`]).

use crate::error::StoreError;
use kurs_common::BoxFuture;

/// A keyed blob store: `read` returns the whole stored document for a key,
/// `write` replaces it.
pub trait KvBackend: Send + Sync {
    /// Read the raw document stored under `key`, if any.
    fn read(&self, key: &str) -> BoxFuture<'_, Option<String>, StoreError>;

    /// Replace the document stored under `key`.
    fn write(&self, key: &str, value: String) -> BoxFuture<'_, (), StoreError>;
}
