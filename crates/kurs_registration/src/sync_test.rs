#[cfg(test)]
mod tests {
    use crate::logic::{RegistrationManager, RegistrationStore};
    use crate::sync::{migrate_registrations, RegistrationCache};
    use chrono::{TimeZone, Utc};
    use kurs_common::services::FixedClock;
    use kurs_common::{Registration, RegistrationStatus};
    use kurs_store::{CollectionStore, MemoryKvBackend, REGISTRATIONS_KEY};
    use std::sync::Arc;

    fn reg(user_id: &str, event_id: &str) -> Registration {
        Registration::new(
            user_id,
            event_id,
            Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
        )
    }

    fn durable_manager() -> (Arc<RegistrationStore>, RegistrationManager) {
        let backend = Arc::new(MemoryKvBackend::new());
        let store: Arc<RegistrationStore> =
            Arc::new(CollectionStore::new(backend, REGISTRATIONS_KEY));
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap(),
        ));
        let manager = RegistrationManager::new(store.clone(), clock);
        (store, manager)
    }

    #[test]
    fn test_reconcile_prefers_authoritative_record() {
        let mut cache = RegistrationCache::new();

        let optimistic = reg("u1", "e1");
        cache.apply_optimistic(optimistic.clone());

        // The store caught up with a different id and an admin decision.
        let mut authoritative = reg("u1", "e1");
        authoritative.status = RegistrationStatus::Approved;
        cache.reconcile(vec![authoritative.clone()]);

        assert_eq!(cache.entries().len(), 1);
        assert_eq!(cache.entries()[0].id, authoritative.id);
        assert_eq!(
            cache.status_for_event("e1"),
            Some(RegistrationStatus::Approved)
        );
    }

    #[test]
    fn test_reconcile_keeps_optimistic_entry_until_store_catches_up() {
        let mut cache = RegistrationCache::new();
        cache.apply_optimistic(reg("u1", "e1"));
        cache.apply_optimistic(reg("u1", "e2"));

        // Refresh raced ahead of the second create: only e1 is in the store.
        cache.reconcile(vec![reg("u1", "e1")]);

        assert_eq!(cache.entries().len(), 2);
        assert_eq!(
            cache.status_for_event("e2"),
            Some(RegistrationStatus::Pending)
        );
    }

    #[test]
    fn test_apply_optimistic_replaces_same_pair() {
        let mut cache = RegistrationCache::new();
        cache.apply_optimistic(reg("u1", "e1"));
        cache.apply_optimistic(reg("u1", "e1"));

        assert_eq!(cache.entries().len(), 1);
    }

    #[test]
    fn test_status_for_event_without_registration() {
        let cache = RegistrationCache::new();
        assert_eq!(cache.status_for_event("e1"), None);
    }

    #[tokio::test]
    async fn test_migration_moves_local_records_once() {
        let local_backend = Arc::new(MemoryKvBackend::new());
        let local: RegistrationStore = CollectionStore::new(local_backend, REGISTRATIONS_KEY);
        local
            .save_all(&[reg("u1", "e1"), reg("u2", "e2")])
            .await
            .unwrap();

        let (durable, manager) = durable_manager();
        // u2/e2 was already requested through the durable path.
        manager.create_registration("u2", "e2").await.unwrap();

        let report = migrate_registrations(&local, &manager).await.unwrap();
        assert_eq!(report.migrated, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 0);
        assert!(report.success());
        assert_eq!(durable.get_all().await.unwrap().len(), 2);

        // Re-running moves nothing new.
        let report = migrate_registrations(&local, &manager).await.unwrap();
        assert_eq!(report.migrated, 0);
        assert_eq!(report.skipped, 2);
        assert_eq!(durable.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_migration_with_empty_local_store() {
        let local_backend = Arc::new(MemoryKvBackend::new());
        let local: RegistrationStore = CollectionStore::new(local_backend, REGISTRATIONS_KEY);

        let (_durable, manager) = durable_manager();
        let report = migrate_registrations(&local, &manager).await.unwrap();
        assert_eq!(report, Default::default());
    }
}
