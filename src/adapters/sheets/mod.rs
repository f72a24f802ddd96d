//! Submission Store Adapters
//!
//! Implementations of the SubmissionStore port.
//!
//! ## Available Adapters
//!
//! - **GoogleSheetsStore** - Reads the submissions tab through the Sheets values API
//! - **InMemorySubmissionStore** - Holds rows in memory (testing/development)

mod google_sheets_store;
mod in_memory_store;

pub use google_sheets_store::{GoogleSheetsConfig, GoogleSheetsStore};
pub use in_memory_store::InMemorySubmissionStore;
