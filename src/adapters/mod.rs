//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routers for the dispatcher and navigation endpoints
//! - `sheets` - Submission store implementations (Google Sheets, in-memory)
//! - `storage` - Client storage implementations (cookies, in-memory)

pub mod http;
pub mod sheets;
pub mod storage;

pub use http::{app_router, DispatchAppState};
pub use sheets::{GoogleSheetsConfig, GoogleSheetsStore, InMemorySubmissionStore};
pub use storage::{CookieStorage, InMemoryClientStorage};
