// --- File: crates/services/kurs_backend/src/app_state.rs ---
use kurs_common::services::{Clock, SystemClock};
use kurs_config::AppConfig;
use kurs_notify::NotificationEngine;
use kurs_registration::RegistrationManager;
use kurs_store::{
    CollectionStore, KvBackend, KvClient, KvEventCatalog, MemoryKvBackend, StoreError,
    NOTIFICATIONS_KEY, REGISTRATIONS_KEY,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Application state that is shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub manager: Arc<RegistrationManager>,
    pub engine: Arc<NotificationEngine>,
}

impl AppState {
    /// Wire the stores, lifecycle manager and notification engine from the
    /// configuration.
    ///
    /// With a configured database this runs against the durable backend;
    /// without one it falls back to the in-memory backend (local-only
    /// mode).
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, StoreError> {
        let backend: Arc<dyn KvBackend> = match &config.database {
            Some(db) => {
                let client = KvClient::from_url(&db.url).await?;
                client.init_schema().await?;
                info!("Using durable store at {}", db.url);
                Arc::new(client)
            }
            None => {
                warn!("No database configured, falling back to in-memory store");
                Arc::new(MemoryKvBackend::new())
            }
        };

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let registrations = Arc::new(CollectionStore::new(backend.clone(), REGISTRATIONS_KEY));
        let manager = Arc::new(RegistrationManager::new(registrations, clock.clone()));

        let notifications = Arc::new(CollectionStore::new(backend.clone(), NOTIFICATIONS_KEY));
        let catalog = Arc::new(KvEventCatalog::new(backend));
        let engine = Arc::new(NotificationEngine::new(
            notifications,
            catalog,
            clock,
            &config.notifications,
        ));

        Ok(Self {
            config,
            manager,
            engine,
        })
    }
}
