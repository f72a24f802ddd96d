//! In-Memory Submission Store Adapter
//!
//! Holds the submissions sheet in memory. Useful for testing and local
//! development without spreadsheet credentials.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::submissions::SheetRow;
use crate::ports::{StoreError, SubmissionStore};

/// In-memory submissions sheet
#[derive(Debug, Clone)]
pub struct InMemorySubmissionStore {
    rows: Arc<RwLock<Option<Vec<SheetRow>>>>,
    failure: Arc<RwLock<Option<StoreError>>>,
}

impl InMemorySubmissionStore {
    /// Create a store whose sheet does not exist yet
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(None)),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a store holding `rows`, header row first
    pub fn with_rows(rows: Vec<SheetRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(Some(rows))),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Append a row, creating the sheet if needed
    pub async fn append(&self, row: SheetRow) {
        self.rows.write().await.get_or_insert_with(Vec::new).push(row);
    }

    /// Make every subsequent read fail with `error`
    pub async fn fail_with(&self, error: StoreError) {
        *self.failure.write().await = Some(error);
    }

    /// Clear any injected failure
    pub async fn recover(&self) {
        *self.failure.write().await = None;
    }

    /// Get the number of stored rows, header included
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.as_ref().map_or(0, Vec::len)
    }
}

impl Default for InMemorySubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn read_all(&self) -> Result<Option<Vec<SheetRow>>, StoreError> {
        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }
        Ok(self.rows.read().await.clone())
    }
}
