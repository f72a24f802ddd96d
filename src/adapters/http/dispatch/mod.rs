//! Dispatcher HTTP adapter module.
//!
//! A single `POST /` endpoint that routes `{ "action": ... }` requests.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{Action, ActionRequest};
pub use handlers::DispatchAppState;
pub use routes::dispatch_routes;
