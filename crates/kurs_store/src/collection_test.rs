#[cfg(test)]
mod tests {
    use crate::backend::KvBackend;
    use crate::error::StoreError;
    use crate::{CollectionStore, MemoryKvBackend};
    use kurs_common::BoxFuture;
    use serde::{Deserialize, Serialize};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        value: i64,
    }

    fn entry(id: &str, value: i64) -> Entry {
        Entry {
            id: id.to_string(),
            value,
        }
    }

    /// Backend wrapper that counts writes, to observe skipped write-backs.
    struct CountingBackend {
        inner: MemoryKvBackend,
        writes: AtomicUsize,
    }

    impl CountingBackend {
        fn new() -> Self {
            Self {
                inner: MemoryKvBackend::new(),
                writes: AtomicUsize::new(0),
            }
        }

        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl KvBackend for CountingBackend {
        fn read(&self, key: &str) -> BoxFuture<'_, Option<String>, StoreError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: String) -> BoxFuture<'_, (), StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.write(key, value)
        }
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_empty_collection() {
        let backend = Arc::new(MemoryKvBackend::new());
        let store: CollectionStore<Entry> = CollectionStore::new(backend, "entries");

        let items = store.get_all().await.expect("read should succeed");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_get_roundtrip() {
        let backend = Arc::new(MemoryKvBackend::new());
        let store: CollectionStore<Entry> = CollectionStore::new(backend, "entries");

        let items = vec![entry("a", 1), entry("b", 2)];
        store.save_all(&items).await.expect("save should succeed");

        let read_back = store.get_all().await.expect("read should succeed");
        assert_eq!(read_back, items);
    }

    #[tokio::test]
    async fn test_update_applies_mutation_and_returns_result() {
        let backend = Arc::new(MemoryKvBackend::new());
        let store: CollectionStore<Entry> = CollectionStore::new(backend, "entries");

        let added = store
            .update(|items| {
                items.push(entry("a", 1));
                (items.len(), true)
            })
            .await
            .expect("update should succeed");

        assert_eq!(added, 1);
        assert_eq!(store.get_all().await.unwrap(), vec![entry("a", 1)]);
    }

    #[tokio::test]
    async fn test_update_skips_write_when_unchanged() {
        let backend = Arc::new(CountingBackend::new());
        let store: CollectionStore<Entry> = CollectionStore::new(backend.clone(), "entries");

        store.save_all(&[entry("a", 1)]).await.unwrap();
        assert_eq!(backend.write_count(), 1);

        let found = store
            .update(|items| (items.iter().any(|e| e.id == "a"), false))
            .await
            .unwrap();

        assert!(found);
        assert_eq!(backend.write_count(), 1, "no-op update must not write");
    }

    #[tokio::test]
    async fn test_concurrent_updates_do_not_lose_writes() {
        let backend = Arc::new(MemoryKvBackend::new());
        let store: Arc<CollectionStore<Entry>> =
            Arc::new(CollectionStore::new(backend, "entries"));

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .update(move |items| {
                        items.push(entry(&format!("e{}", i), i));
                        ((), true)
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.expect("task should not panic").unwrap();
        }

        let items = store.get_all().await.unwrap();
        assert_eq!(items.len(), 16, "every read-modify-write must survive");
    }
}
