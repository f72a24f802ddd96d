//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (agency name, percentage, envelope, errors)
//! - `submissions` - Agency dashboard aggregation over the submission store
//! - `navigation` - Navigation link sets, rendering, and page injection

pub mod foundation;
pub mod navigation;
pub mod submissions;
