//! Store module — durable, encrypted credential records.
//!
//! This module provides:
//! - `CredentialRecord` and the payload format (`record`)
//! - The SQLite-backed `CredentialStore` (`credentials`)

pub mod credentials;
pub mod record;

// Re-export the most commonly used items.
pub use credentials::CredentialStore;
pub use record::CredentialRecord;
