//! In-memory quality sample log.

use std::sync::RwLock;

use tracing::info;

use crate::domain::foundation::AnimalId;
use crate::domain::herd::QualitySample;
use crate::ports::{SampleLog, SampleLogError};

/// In-memory sample table, ordered by recording time.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned, which can only happen
/// after another panic mid-mutation.
pub struct InMemorySampleLog {
    samples: RwLock<Vec<QualitySample>>,
}

impl InMemorySampleLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            samples: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemorySampleLog {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleLog for InMemorySampleLog {
    fn add(&self, sample: QualitySample) -> Result<(), SampleLogError> {
        let mut samples = self
            .samples
            .write()
            .expect("InMemorySampleLog: lock poisoned");
        if samples.iter().any(|s| s.id() == sample.id()) {
            return Err(SampleLogError::DuplicateSample(sample.id()));
        }
        info!(sample_id = %sample.id(), animal_id = %sample.animal_id(), "sample recorded");
        samples.push(sample);
        Ok(())
    }

    fn remove_for_animal(&self, animal_id: AnimalId) -> usize {
        let mut samples = self
            .samples
            .write()
            .expect("InMemorySampleLog: lock poisoned");
        let before = samples.len();
        samples.retain(|s| s.animal_id() != animal_id);
        let dropped = before - samples.len();
        if dropped > 0 {
            info!(animal_id = %animal_id, dropped, "cascaded sample removal");
        }
        dropped
    }

    fn list(&self) -> Vec<QualitySample> {
        self.samples
            .read()
            .expect("InMemorySampleLog: lock poisoned")
            .clone()
    }
}
