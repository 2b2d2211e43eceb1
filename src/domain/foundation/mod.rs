//! Shared kernel: identifiers and error types used across the domain.

pub mod errors;
pub mod ids;

pub use errors::ValidationError;
pub use ids::{AnimalId, SampleId};
