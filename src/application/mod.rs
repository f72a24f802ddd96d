//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers never let a store failure escape: they answer with an error
//! envelope instead.

pub mod handlers;

pub use handlers::{
    session_from_storage, GetAgencyDashboardHandler, GetAgencyDashboardQuery,
    GetAgencyDashboardResult, LogoutHandler, RenderNavigationHandler, TestConnectionHandler,
};
