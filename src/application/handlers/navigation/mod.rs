//! Navigation handlers.
//!
//! Read the login state from client storage and drive the navigation renderer.

mod logout;
mod render_navigation;

pub use logout::LogoutHandler;
pub use render_navigation::{session_from_storage, RenderNavigationHandler};
