// --- File: crates/kurs_common/src/error.rs ---
use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The base error type for all Kurs errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for KursError.
#[derive(Error, Debug)]
pub enum KursError {
    /// Error occurred while reading or writing a store
    #[error("Persistence failed: {0}")]
    PersistenceError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for KursError {
    fn status_code(&self) -> u16 {
        match self {
            KursError::PersistenceError(_) => 500,
            KursError::ParseError(_) => 400,
            KursError::ConfigError(_) => 500,
            KursError::ValidationError(_) => 400,
            KursError::NotFoundError(_) => 404,
            KursError::InternalError(_) => 500,
        }
    }
}

/// Converts any error that maps into [`KursError`] to an axum error response tuple.
///
/// Handlers use this to keep status-code mapping in one place instead of
/// matching on every domain error variant.
pub fn error_response(err: impl Into<KursError>) -> (StatusCode, String) {
    let err: KursError = err.into();
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

// Common error conversions
impl From<serde_json::Error> for KursError {
    fn from(err: serde_json::Error) -> Self {
        KursError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for KursError {
    fn from(err: std::io::Error) -> Self {
        KursError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> KursError {
    KursError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> KursError {
    KursError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> KursError {
    KursError::NotFoundError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> KursError {
    KursError::InternalError(message.to_string())
}
