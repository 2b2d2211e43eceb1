//! Quality sample log port.
//!
//! Contract for the store that owns `QualitySample` entities. Samples are
//! append-only; the only deletion is the cascade that follows an animal's
//! removal.

use crate::domain::foundation::{AnimalId, SampleId};
use crate::domain::herd::QualitySample;

/// Errors that can occur against the sample log.
#[derive(Debug, thiserror::Error)]
pub enum SampleLogError {
    #[error("Sample already recorded: {0}")]
    DuplicateSample(SampleId),
}

/// Store port for quality samples.
pub trait SampleLog: Send + Sync {
    /// Appends a recorded sample.
    ///
    /// # Errors
    ///
    /// - `DuplicateSample` if the id is already present
    fn add(&self, sample: QualitySample) -> Result<(), SampleLogError>;

    /// Removes every sample owned by the given animal, returning how many
    /// were dropped. Used by the removal cascade; zero is not an error.
    fn remove_for_animal(&self, animal_id: AnimalId) -> usize;

    /// Read-only snapshot of all samples, in recording order.
    fn list(&self) -> Vec<QualitySample>;
}
