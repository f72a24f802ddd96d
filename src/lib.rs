//! NoLossForm - agency dashboard and site navigation backend.
//!
//! Aggregates form submissions held in a spreadsheet into per-agency
//! dashboard statistics behind a single action dispatcher, and renders the
//! site navigation from the login state kept in client storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
