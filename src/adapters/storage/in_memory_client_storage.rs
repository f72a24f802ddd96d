//! In-Memory Client Storage Adapter
//!
//! A plain map standing in for browser storage. Useful for testing and
//! server-side rendering without a request.

use std::collections::HashMap;

use crate::ports::ClientStorage;

/// In-memory key/value client storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryClientStorage {
    entries: HashMap<String, String>,
}

impl InMemoryClientStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-filled with `entries`
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get the number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ClientStorage for InMemoryClientStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
