//! Event catalog provider over the key-value store.
//!
//! The catalog itself is owned by the surrounding application; this adapter
//! only reads the `events` collection key it maintains. A missing event is
//! a normal outcome, never an error.

use crate::backend::KvBackend;
use crate::collection::CollectionStore;
use crate::EVENTS_KEY;
use kurs_common::{BoxFuture, BoxedError, CatalogEvent, EventCatalogProvider};
use std::sync::Arc;

/// Read-only `EventCatalogProvider` backed by the `events` collection.
#[derive(Debug)]
pub struct KvEventCatalog {
    events: CollectionStore<CatalogEvent>,
}

impl KvEventCatalog {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self {
            events: CollectionStore::new(backend, EVENTS_KEY),
        }
    }
}

impl EventCatalogProvider for KvEventCatalog {
    type Error = BoxedError;

    fn find_event(&self, event_id: &str) -> BoxFuture<'_, Option<CatalogEvent>, BoxedError> {
        let event_id = event_id.to_string();
        Box::pin(async move {
            let events = self
                .events
                .get_all()
                .await
                .map_err(|e| BoxedError(Box::new(e)))?;
            Ok(events.into_iter().find(|e| e.id == event_id))
        })
    }

    fn list_events(&self) -> BoxFuture<'_, Vec<CatalogEvent>, BoxedError> {
        Box::pin(async move {
            self.events
                .get_all()
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}
