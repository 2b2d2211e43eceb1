//! Herd-wide headline metrics.

use serde::Serialize;

use crate::domain::herd::{Animal, QualitySample};

/// Scalar headline metrics over the whole herd.
///
/// Volume and averages run over ALL samples, including those of inactive
/// or since-removed animals; only `active_animal_count` looks at status.
/// This asymmetry is deliberate and mirrored by the per-animal view, which
/// filters the other way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HerdSummary {
    /// Number of animals currently in production.
    pub active_animal_count: usize,
    /// Total recorded volume in liters.
    pub total_volume: f64,
    /// Mean fat percentage; 0 when there are no samples.
    pub average_fat: f64,
    /// Mean protein percentage; 0 when there are no samples.
    pub average_protein: f64,
    /// Mean somatic cell count in thousand/ml; 0 when there are no samples.
    pub average_scc: f64,
}

/// Reduces the full sample collection to headline metrics.
///
/// Total over its inputs: never fails, never divides by zero.
pub fn summarize(animals: &[Animal], samples: &[QualitySample]) -> HerdSummary {
    let active_animal_count = animals.iter().filter(|a| a.is_active()).count();

    HerdSummary {
        active_animal_count,
        total_volume: samples.iter().map(QualitySample::volume).sum(),
        average_fat: mean(samples, QualitySample::fat),
        average_protein: mean(samples, QualitySample::protein),
        average_scc: mean(samples, QualitySample::scc),
    }
}

/// Arithmetic mean of one measurement over a sample set, 0 when empty.
pub(crate) fn mean(samples: &[QualitySample], field: impl Fn(&QualitySample) -> f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(field).sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
