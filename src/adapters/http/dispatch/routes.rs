//! HTTP routes for the action dispatcher.

use axum::routing::post;
use axum::Router;

use super::handlers::{dispatch, DispatchAppState};

/// Creates the dispatcher router.
pub fn dispatch_routes(state: DispatchAppState) -> Router {
    Router::new()
        // POST /
        .route("/", post(dispatch))
        .with_state(state)
}
