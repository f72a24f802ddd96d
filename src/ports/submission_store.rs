use async_trait::async_trait;

use crate::domain::submissions::SheetRow;

/// Read-only port over the tabular submission store.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Reads the entire submissions range, header row first.
    ///
    /// Returns `Ok(None)` when the submissions sheet does not exist yet.
    async fn read_all(&self) -> Result<Option<Vec<SheetRow>>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        self.read_all().await.map(|_| ())
    }
}

/// Errors that can occur while reading the store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Store rejected credentials")]
    Unauthorized,

    #[error("Malformed store response: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        StoreError::Malformed(message.into())
    }
}
