//! In-memory key-value backend.
//!
//! The local-only half of the dual-storage design: same contract as the
//! durable backend, nothing survives the process. Also the backend of
//! choice for tests.

use crate::backend::KvBackend;
use crate::error::StoreError;
use kurs_common::BoxFuture;
use std::collections::HashMap;
use std::sync::Mutex;

/// A `KvBackend` over a process-local map.
#[derive(Debug, Default)]
pub struct MemoryKvBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryKvBackend {
    fn read(&self, key: &str) -> BoxFuture<'_, Option<String>, StoreError> {
        let value = self
            .entries
            .lock()
            .expect("kv entries mutex poisoned")
            .get(key)
            .cloned();
        Box::pin(async move { Ok(value) })
    }

    fn write(&self, key: &str, value: String) -> BoxFuture<'_, (), StoreError> {
        self.entries
            .lock()
            .expect("kv entries mutex poisoned")
            .insert(key.to_string(), value);
        Box::pin(async move { Ok(()) })
    }
}
