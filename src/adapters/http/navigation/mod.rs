//! Navigation HTTP adapter module.
//!
//! Serves the rendered navigation fragment and the logout action.

pub mod handlers;
pub mod routes;

pub use routes::navigation_routes;
