#[cfg(test)]
mod tests {
    use crate::logic::{CreationOutcome, RegistrationError, RegistrationManager, RegistrationStore};
    use chrono::{Duration, TimeZone, Utc};
    use kurs_common::services::FixedClock;
    use kurs_common::{Registration, RegistrationStatus};
    use kurs_store::{CollectionStore, MemoryKvBackend, REGISTRATIONS_KEY};
    use std::sync::Arc;

    fn setup() -> (Arc<RegistrationStore>, Arc<FixedClock>, RegistrationManager) {
        let backend = Arc::new(MemoryKvBackend::new());
        let store: Arc<RegistrationStore> =
            Arc::new(CollectionStore::new(backend, REGISTRATIONS_KEY));
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap(),
        ));
        let manager = RegistrationManager::new(store.clone(), clock.clone());
        (store, clock, manager)
    }

    #[tokio::test]
    async fn test_create_registration_is_idempotent() {
        let (store, _clock, manager) = setup();

        let first = manager.create_registration("u1", "e1").await.unwrap();
        assert!(first.was_created());
        assert_eq!(first.registration().status, RegistrationStatus::Pending);

        let second = manager.create_registration("u1", "e1").await.unwrap();
        assert!(!second.was_created());
        assert_eq!(second.registration().id, first.registration().id);

        let stored = store.get_all().await.unwrap();
        assert_eq!(stored.len(), 1, "no duplicate per (user, event) pair");
    }

    #[tokio::test]
    async fn test_same_user_can_register_for_two_events() {
        let (store, _clock, manager) = setup();

        manager.create_registration("u1", "e1").await.unwrap();
        manager.create_registration("u1", "e2").await.unwrap();

        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_ids() {
        let (_store, _clock, manager) = setup();

        let err = manager.create_registration("", "e1").await.unwrap_err();
        assert!(matches!(err, RegistrationError::EmptyField("user_id")));

        let err = manager.create_registration("u1", "").await.unwrap_err();
        assert!(matches!(err, RegistrationError::EmptyField("event_id")));
    }

    #[tokio::test]
    async fn test_status_overwrite_is_not_guarded() {
        // No transition guard: an admin reverses a decision by issuing the
        // opposite status, and updated_at advances on every call.
        let (_store, clock, manager) = setup();

        let created = manager
            .create_registration("u1", "e1")
            .await
            .unwrap()
            .into_registration();

        clock.advance(Duration::hours(1));
        let approved = manager
            .update_status(&created.id, RegistrationStatus::Approved)
            .await
            .unwrap()
            .expect("registration exists");
        assert_eq!(approved.status, RegistrationStatus::Approved);
        assert_eq!(approved.updated_at, created.created_at + Duration::hours(1));

        clock.advance(Duration::hours(1));
        let rejected = manager
            .update_status(&created.id, RegistrationStatus::Rejected)
            .await
            .unwrap()
            .expect("registration exists");
        assert_eq!(rejected.status, RegistrationStatus::Rejected);
        assert_eq!(rejected.updated_at, created.created_at + Duration::hours(2));
        assert_eq!(rejected.created_at, created.created_at, "created_at immutable");
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_returns_none() {
        let (_store, _clock, manager) = setup();

        let result = manager
            .update_status("reg-ghost", RegistrationStatus::Approved)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_registration_is_idempotent() {
        let (store, _clock, manager) = setup();

        let created = manager
            .create_registration("u1", "e1")
            .await
            .unwrap()
            .into_registration();

        assert!(manager.delete_registration(&created.id).await.unwrap());
        assert!(store.get_all().await.unwrap().is_empty());

        // Deleting an id that is already gone still succeeds.
        assert!(!manager.delete_registration(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_by_user_returns_only_that_user() {
        let (_store, _clock, manager) = setup();

        manager.create_registration("u1", "e1").await.unwrap();
        manager.create_registration("u1", "e2").await.unwrap();
        manager.create_registration("u2", "e1").await.unwrap();

        let u1_regs = manager.list_by_user("u1").await.unwrap();
        assert_eq!(u1_regs.len(), 2);
        assert!(u1_regs.iter().all(|r| r.user_id == "u1"));

        assert!(manager.list_by_user("u3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_approved_filters_by_status() {
        let (_store, _clock, manager) = setup();

        let a = manager
            .create_registration("u1", "e1")
            .await
            .unwrap()
            .into_registration();
        manager.create_registration("u2", "e1").await.unwrap();

        manager
            .update_status(&a.id, RegistrationStatus::Approved)
            .await
            .unwrap();

        let approved = manager.list_approved().await.unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, a.id);
        assert_eq!(manager.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_import_preserves_record_fields() {
        let (store, _clock, manager) = setup();

        let mut record = Registration::new("u1", "e1", clock_start());
        record.status = RegistrationStatus::Approved;

        let outcome = manager.import_registration(record.clone()).await.unwrap();
        assert!(outcome.was_created());

        let stored = store.get_all().await.unwrap();
        assert_eq!(stored[0].id, record.id);
        assert_eq!(stored[0].status, RegistrationStatus::Approved);
        assert_eq!(stored[0].created_at, record.created_at);

        // A second import of the same pair keeps the stored record.
        let again = manager.import_registration(record).await.unwrap();
        assert!(matches!(again, CreationOutcome::AlreadyExisted(_)));
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    fn clock_start() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap()
    }
}
