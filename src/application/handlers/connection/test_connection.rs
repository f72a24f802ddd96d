//! TestConnectionHandler - Checks that the submission store is reachable.

use std::sync::Arc;

use crate::domain::foundation::ResponseEnvelope;
use crate::ports::SubmissionStore;

pub struct TestConnectionHandler {
    store: Arc<dyn SubmissionStore>,
}

impl TestConnectionHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> ResponseEnvelope<()> {
        match self.store.ping().await {
            Ok(()) => ResponseEnvelope::acknowledged("Connection successful"),
            Err(e) => {
                tracing::warn!(error = %e, "Submission store connection test failed");
                ResponseEnvelope::error(format!("Connection failed: {}", e))
            }
        }
    }
}
