// --- File: crates/kurs_registration/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod routes;
pub mod sync;
#[cfg(test)]
mod sync_test;

// Re-export the shared registration model for convenience
pub use kurs_common::models::{Registration, RegistrationStatus};

pub use handlers::RegistrationState;
pub use logic::{CreationOutcome, RegistrationError, RegistrationManager, RegistrationStore};
pub use routes::routes;
pub use sync::{migrate_registrations, MigrationReport, RegistrationCache};
