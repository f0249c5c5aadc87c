//! Durable key-value client backed by SQLx.
//!
//! This is the "remote" backend of the dual-storage design: one `kv_store`
//! table, one row per collection key. The client is database agnostic
//! through the SQLx `Any` driver; SQLite is the default feature.

use crate::backend::KvBackend;
use crate::error::StoreError;
use kurs_common::BoxFuture;
use sqlx::pool::PoolOptions;
use sqlx::{Pool, Row};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

/// Key-value client over a SQL connection pool.
#[derive(Debug, Clone)]
pub struct KvClient {
    pool: Pool<sqlx::Any>,
}

impl KvClient {
    /// Create a new key-value client from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or invalid, or if the
    /// connection pool cannot be created.
    pub async fn from_url(db_url: &str) -> Result<Self, StoreError> {
        if db_url.is_empty() {
            return Err(StoreError::UrlError("Database URL is empty".to_string()));
        }

        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool })
    }

    async fn create_pool(db_url: &str) -> Result<Pool<sqlx::Any>, StoreError> {
        debug!("Creating store pool with URL: {}", db_url);

        #[cfg(feature = "sqlite")]
        {
            // Register the bundled drivers with the "any" driver
            sqlx::any::install_default_drivers();
        }

        let pool_options = PoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Duration::from_secs(600));

        // SQLite will not create a missing database file through the Any
        // driver, so make sure the file and its directory exist first.
        if db_url.starts_with("sqlite:") {
            let db_path = db_url
                .strip_prefix("sqlite://")
                .or_else(|| db_url.strip_prefix("sqlite:"))
                .unwrap_or(db_url);

            if !db_path.contains(":memory:") && !db_path.is_empty() {
                if let Some(dir) = std::path::Path::new(db_path).parent() {
                    if !dir.exists() {
                        debug!("Creating directory for SQLite database: {:?}", dir);
                        std::fs::create_dir_all(dir).map_err(|e| {
                            error!("Failed to create directory for SQLite database: {}", e);
                            StoreError::PoolError(format!("Failed to create directory: {}", e))
                        })?;
                    }
                }

                if !std::path::Path::new(db_path).exists() {
                    debug!("Creating empty SQLite database file: {}", db_path);
                    std::fs::File::create(db_path).map_err(|e| {
                        error!("Failed to create SQLite database file: {}", e);
                        StoreError::PoolError(format!("Failed to create database file: {}", e))
                    })?;
                }
            }
        }

        let pool = pool_options
            .connect_with(sqlx::any::AnyConnectOptions::from_str(db_url)?)
            .await
            .map_err(|e| {
                error!("Failed to create store pool: {}", e);
                StoreError::PoolError(e.to_string())
            })?;

        info!("Store pool created successfully");
        Ok(pool)
    }

    /// Initialize the key-value schema.
    ///
    /// Creates the `kv_store` table if it doesn't already exist.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        debug!("Initializing kv_store schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
        "#;

        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))?;

        info!("kv_store schema initialized successfully");
        Ok(())
    }

    /// Get the raw value stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to read key '{}': {}", key, e);
                StoreError::QueryError(e.to_string())
            })?;

        match row {
            Some(row) => {
                let value: String = row
                    .try_get("value")
                    .map_err(|e| StoreError::QueryError(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Upsert `value` under `key`.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO kv_store (key, value) VALUES ($1, $2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#;

        sqlx::query(query)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to write key '{}': {}", key, e);
                StoreError::QueryError(e.to_string())
            })?;

        Ok(())
    }

    /// Check if the store is reachable by executing a simple query.
    pub async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

impl KvBackend for KvClient {
    fn read(&self, key: &str) -> BoxFuture<'_, Option<String>, StoreError> {
        let key = key.to_string();
        Box::pin(async move { self.get(&key).await })
    }

    fn write(&self, key: &str, value: String) -> BoxFuture<'_, (), StoreError> {
        let key = key.to_string();
        Box::pin(async move { self.set(&key, &value).await })
    }
}
