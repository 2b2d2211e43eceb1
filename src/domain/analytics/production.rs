//! Per-animal production aggregates.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::AnimalId;
use crate::domain::herd::{Animal, QualitySample};

/// Production totals for one active animal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRow {
    pub animal_id: AnimalId,
    /// Display name, for chart axes.
    pub animal_name: String,
    /// Total recorded volume for this animal, liters.
    pub total_volume: f64,
    /// Mean fat percentage over this animal's samples; 0 when it has none.
    pub average_fat: f64,
}

/// Computes one row per ACTIVE animal, in registry order.
///
/// Samples of inactive animals and samples whose owning animal is gone
/// contribute nothing here, even though the herd summary still counts
/// them. Output order is the input order of the active animals; rows are
/// never re-sorted by value.
pub fn per_animal_production(animals: &[Animal], samples: &[QualitySample]) -> Vec<ProductionRow> {
    // Group once up front so the per-animal pass stays linear.
    let mut by_animal: HashMap<AnimalId, Vec<&QualitySample>> = HashMap::new();
    for sample in samples {
        by_animal.entry(sample.animal_id()).or_default().push(sample);
    }

    animals
        .iter()
        .filter(|animal| animal.is_active())
        .map(|animal| {
            let own = by_animal.get(&animal.id()).map_or(&[][..], Vec::as_slice);
            ProductionRow {
                animal_id: animal.id(),
                animal_name: animal.name().to_string(),
                total_volume: own.iter().map(|s| s.volume()).sum(),
                average_fat: mean_refs(own),
            }
        })
        .collect()
}

fn mean_refs(samples: &[&QualitySample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.fat()).sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
#[path = "production_test.rs"]
mod production_test;
