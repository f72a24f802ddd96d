//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, the response envelope, and error types
//! that form the vocabulary of the NoLossForm domain.

mod agency;
mod envelope;
mod errors;
mod percentage;

pub use agency::AgencyName;
pub use envelope::{EnvelopeStatus, ResponseEnvelope};
pub use errors::ValidationError;
pub use percentage::Percentage;
