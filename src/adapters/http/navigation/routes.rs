//! HTTP routes for the navigation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_navigation, post_logout};

/// Creates the navigation router. Stateless: everything comes from cookies.
pub fn navigation_routes() -> Router {
    Router::new()
        // GET /navigation
        .route("/navigation", get(get_navigation))
        // POST /logout
        .route("/logout", post(post_logout))
}
