//! Application handlers.
//!
//! Query handlers over the submission store and the navigation handlers
//! over client storage.

pub mod connection;
pub mod dashboard;
pub mod navigation;

pub use connection::TestConnectionHandler;
pub use dashboard::{
    GetAgencyDashboardHandler, GetAgencyDashboardQuery, GetAgencyDashboardResult,
};
pub use navigation::{session_from_storage, LogoutHandler, RenderNavigationHandler};
