//! RenderNavigationHandler - Renders the navigation for the caller's client storage.

use crate::domain::navigation::{self, NavigationSession, AGENCY_EMAIL_KEY, LOGGED_IN_KEY};
use crate::ports::ClientStorage;

/// Builds the explicit session from the stored login flag and identity.
pub fn session_from_storage(storage: &dyn ClientStorage) -> NavigationSession {
    NavigationSession::from_stored(
        storage.get(LOGGED_IN_KEY).as_deref(),
        storage.get(AGENCY_EMAIL_KEY),
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderNavigationHandler;

impl RenderNavigationHandler {
    pub fn new() -> Self {
        Self
    }

    /// Navigation markup for the stored session.
    pub fn handle(&self, storage: &dyn ClientStorage) -> String {
        let session = session_from_storage(storage);
        tracing::debug!(logged_in = session.is_logged_in(), "Rendering navigation");
        navigation::render(&session)
    }

    /// `page` with the navigation inserted once at the start of its body.
    ///
    /// Library entry point for hosts that serve whole pages; the HTTP
    /// adapter only serves the fragment from [`handle`](Self::handle).
    pub fn inject(&self, page: &str, storage: &dyn ClientStorage) -> String {
        navigation::inject(page, &session_from_storage(storage))
    }
}
