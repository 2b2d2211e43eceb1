//! RecordSampleHandler - records a milk-quality analysis from form input.
//!
//! This is the gate the analytics engine relies on: every numeric field
//! arrives as form text and is parsed and range-checked here, so the
//! engine downstream can assume valid finite numbers throughout.

use std::sync::Arc;

use crate::domain::foundation::{AnimalId, SampleId};
use crate::domain::herd::{Measurements, QualitySample};
use crate::ports::{AnimalRegistry, SampleLog};

use super::{parse_date, parse_number, CommandError};

/// Raw quality-analysis form data, all numbers still text.
#[derive(Debug, Clone)]
pub struct RecordSampleForm {
    pub animal_id: AnimalId,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub volume: String,
    pub fat: String,
    pub protein: String,
    pub lactose: String,
    pub scc: String,
    pub temperature: String,
    pub ph: String,
}

/// Handler for sample recording.
pub struct RecordSampleHandler {
    registry: Arc<dyn AnimalRegistry>,
    samples: Arc<dyn SampleLog>,
}

impl RecordSampleHandler {
    pub fn new(registry: Arc<dyn AnimalRegistry>, samples: Arc<dyn SampleLog>) -> Self {
        Self { registry, samples }
    }

    /// Parses and validates the form, then appends the sample.
    ///
    /// The owning animal must exist NOW; the reference is not re-checked
    /// later, so a future removal cascade is what keeps the log clean.
    pub fn handle(&self, form: RecordSampleForm) -> Result<SampleId, CommandError> {
        if self.registry.find_by_id(form.animal_id).is_none() {
            return Err(CommandError::UnknownAnimal(form.animal_id));
        }

        let date = parse_date("date", &form.date)?;
        let measurements = Measurements {
            volume: parse_number("volume", &form.volume)?,
            fat: parse_number("fat", &form.fat)?,
            protein: parse_number("protein", &form.protein)?,
            lactose: parse_number("lactose", &form.lactose)?,
            scc: parse_number("scc", &form.scc)?,
            temperature: parse_number("temperature", &form.temperature)?,
            ph: parse_number("ph", &form.ph)?,
        };

        let sample = QualitySample::new(SampleId::new(), form.animal_id, date, measurements)?;
        let id = sample.id();
        self.samples.add(sample)?;
        Ok(id)
    }
}
