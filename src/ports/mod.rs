//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionStore` - Whole-range reads of the spreadsheet-backed submission store
//! - `ClientStorage` - Browser-held key/value state used by the navigation

mod client_storage;
mod submission_store;

pub use client_storage::ClientStorage;
pub use submission_store::{StoreError, SubmissionStore};
