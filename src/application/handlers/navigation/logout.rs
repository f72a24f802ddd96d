//! LogoutHandler - Clears the stored session and points at the login page.

use crate::domain::navigation::{LogoutOutcome, SESSION_KEYS};
use crate::ports::ClientStorage;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutHandler;

impl LogoutHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, storage: &mut dyn ClientStorage) -> LogoutOutcome {
        storage.clear(&SESSION_KEYS);
        tracing::info!("Agency logged out");
        LogoutOutcome::default()
    }
}
