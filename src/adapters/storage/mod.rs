//! Client Storage Adapters
//!
//! Implementations of the ClientStorage port used by the navigation.
//!
//! ## Available Adapters
//!
//! - **CookieStorage** - Reads request cookies and replays changes as `Set-Cookie`
//! - **InMemoryClientStorage** - Stores keys in a map (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{CookieStorage, InMemoryClientStorage};
//!
//! // Per request: cookie-backed storage
//! let storage = CookieStorage::from_headers(&headers);
//!
//! // Testing: in-memory storage
//! let storage = InMemoryClientStorage::with_entries([("agencyLoggedIn", "true")]);
//! ```

mod cookie_storage;
mod in_memory_client_storage;

pub use cookie_storage::CookieStorage;
pub use in_memory_client_storage::InMemoryClientStorage;
