// --- File: crates/kurs_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Shared data models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, error_response, internal_error, not_found, validation_error, HttpStatusCode,
    KursError,
};

// Re-export the shared models for easier access
pub use models::{CatalogEvent, Registration, RegistrationStatus};

// Re-export service abstractions for easier access
pub use services::{BoxFuture, BoxedError, Clock, EventCatalogProvider, FixedClock, SystemClock};
