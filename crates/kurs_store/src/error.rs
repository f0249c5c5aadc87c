//! Error types for the store layer

use kurs_common::KursError;
use thiserror::Error;

/// Errors that can occur when reading or writing a store.
///
/// Every variant is a `PersistenceFailure` in the component contract:
/// callers never retry here, they propagate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error from SQLx
    #[error("Store error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the store configuration
    #[error("Store configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Store URL error: {0}")]
    UrlError(String),

    /// Error with connection pool creation
    #[error("Store pool error: {0}")]
    PoolError(String),

    /// Error with a key-value query
    #[error("Store query error: {0}")]
    QueryError(String),

    /// A stored collection failed to encode or decode
    #[error("Failed to encode or decode collection '{key}': {message}")]
    SerializationError { key: String, message: String },
}

impl From<StoreError> for KursError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConfigError(msg) => KursError::ConfigError(msg),
            StoreError::SerializationError { .. } => KursError::ParseError(err.to_string()),
            other => KursError::PersistenceError(other.to_string()),
        }
    }
}
