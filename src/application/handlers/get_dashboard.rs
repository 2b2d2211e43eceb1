//! GetDashboardHandler - assembles the full dashboard view.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::analytics::{
    build_series, classify, per_animal_production, summarize, HerdSummary, ProductionRow,
    QualityTier, SeriesPoint,
};
use crate::domain::assistant::scc_advisory;
use crate::ports::{AnimalRegistry, SampleLog};

/// Everything the dashboard renders, derived in one pass over the stores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub summary: HerdSummary,
    /// Herd quality tier from the average SCC.
    pub quality_tier: QualityTier,
    /// Human-readable commentary on the tier.
    pub advisory: String,
    /// One row per active animal, registry order.
    pub production: Vec<ProductionRow>,
    /// All samples, chronological.
    pub series: Vec<SeriesPoint>,
}

/// Query handler recomputing every derived view from a store snapshot.
///
/// There is no cache to invalidate: the computation is cheap and
/// idempotent, so each call starts from scratch.
pub struct GetDashboardHandler {
    registry: Arc<dyn AnimalRegistry>,
    samples: Arc<dyn SampleLog>,
}

impl GetDashboardHandler {
    pub fn new(registry: Arc<dyn AnimalRegistry>, samples: Arc<dyn SampleLog>) -> Self {
        Self { registry, samples }
    }

    pub fn handle(&self) -> DashboardView {
        let animals = self.registry.list();
        let samples = self.samples.list();
        debug!(
            animals = animals.len(),
            samples = samples.len(),
            "recomputing dashboard"
        );

        let summary = summarize(&animals, &samples);
        let quality_tier = classify(summary.average_scc);

        DashboardView {
            advisory: scc_advisory(summary.average_scc),
            quality_tier,
            production: per_animal_production(&animals, &samples),
            series: build_series(&samples, &animals),
            summary,
        }
    }
}
