//! Typed whole-collection store.
//!
//! Higher-level components never talk to a [`KvBackend`] directly; they go
//! through a `CollectionStore<T>` which owns one collection key and
//! serializes every mutation behind a writer lock. Every save replaces the
//! entire collection, which is only safe with a single active writer; the
//! lock makes that assumption explicit instead of leaving a lost-update
//! race.

use crate::backend::KvBackend;
use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// A typed collection stored as one JSON array under one key.
pub struct CollectionStore<T> {
    backend: Arc<dyn KvBackend>,
    key: String,
    writer: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CollectionStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(backend: Arc<dyn KvBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            writer: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// The collection key this store owns.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the whole collection. A missing key reads as an empty
    /// collection.
    pub async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        match self.backend.read(&self.key).await? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::SerializationError {
                    key: self.key.clone(),
                    message: e.to_string(),
                })
            }
            None => Ok(Vec::new()),
        }
    }

    /// Replace the whole collection.
    pub async fn save_all(&self, items: &[T]) -> Result<(), StoreError> {
        let _permit = self.writer.lock().await;
        self.write_items(items).await
    }

    /// Run one read-modify-write cycle under the writer lock.
    ///
    /// `apply` receives the current collection and returns the operation
    /// result plus whether it modified the collection; the write-back is
    /// skipped when nothing changed. The lock is held across the whole
    /// cycle, so two concurrent mutations can never act on the same stale
    /// snapshot.
    pub async fn update<R>(
        &self,
        apply: impl FnOnce(&mut Vec<T>) -> (R, bool) + Send,
    ) -> Result<R, StoreError> {
        let _permit = self.writer.lock().await;
        let mut items = self.get_all().await?;
        let (result, changed) = apply(&mut items);
        if changed {
            self.write_items(&items).await?;
        } else {
            debug!("Collection '{}' unchanged, skipping write", self.key);
        }
        Ok(result)
    }

    async fn write_items(&self, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items).map_err(|e| StoreError::SerializationError {
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        debug!("Writing {} records to collection '{}'", items.len(), self.key);
        self.backend.write(&self.key, raw).await
    }
}

impl<T> std::fmt::Debug for CollectionStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore")
            .field("key", &self.key)
            .finish()
    }
}
