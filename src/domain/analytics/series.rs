//! Chronological series of sample data points for charting.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::AnimalId;
use crate::domain::herd::{Animal, QualitySample};

/// Name shown when a sample's owning animal cannot be resolved.
pub const UNKNOWN_ANIMAL: &str = "Unknown";

/// Chart format for sample dates (day/month).
const DATE_FORMAT: &str = "%d/%m";

/// One charted data point: the sample's values with its date formatted
/// and its owning animal's name resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Sample date formatted as day/month.
    pub date: String,
    pub animal_name: String,
    pub volume: f64,
    pub fat: f64,
    pub protein: f64,
    pub scc: f64,
    pub temperature: f64,
    pub ph: f64,
}

/// Builds the time-ordered series over all samples.
///
/// Sorting is by the parsed sample date, ascending, and stable: samples
/// sharing a date keep their input order. A sample whose animal is
/// missing from the registry charts under [`UNKNOWN_ANIMAL`] instead of
/// failing; one orphaned record must not blank the whole dashboard.
pub fn build_series(samples: &[QualitySample], animals: &[Animal]) -> Vec<SeriesPoint> {
    let names: HashMap<AnimalId, &str> = animals
        .iter()
        .map(|animal| (animal.id(), animal.name()))
        .collect();

    let mut ordered: Vec<&QualitySample> = samples.iter().collect();
    ordered.sort_by_key(|sample| sample.date());

    ordered
        .into_iter()
        .map(|sample| SeriesPoint {
            date: sample.date().format(DATE_FORMAT).to_string(),
            animal_name: names
                .get(&sample.animal_id())
                .copied()
                .unwrap_or(UNKNOWN_ANIMAL)
                .to_string(),
            volume: sample.volume(),
            fat: sample.fat(),
            protein: sample.protein(),
            scc: sample.scc(),
            temperature: sample.temperature(),
            ph: sample.ph(),
        })
        .collect()
}

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;
