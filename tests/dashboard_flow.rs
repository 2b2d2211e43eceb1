//! End-to-end flow: register animals, record samples through the form
//! handler, and read every derived view off the dashboard.

use std::sync::Arc;

use milkwatch::adapters::memory::{InMemoryAnimalRegistry, InMemorySampleLog};
use milkwatch::application::handlers::{
    GetDashboardHandler, RecordSampleForm, RecordSampleHandler, RegisterAnimalCommand,
    RegisterAnimalHandler, RemoveAnimalCommand, RemoveAnimalHandler, UpdateAnimalCommand,
    UpdateAnimalHandler,
};
use milkwatch::domain::analytics::QualityTier;
use milkwatch::domain::foundation::AnimalId;
use milkwatch::domain::herd::AnimalStatus;

struct Harness {
    registry: Arc<InMemoryAnimalRegistry>,
    samples: Arc<InMemorySampleLog>,
}

impl Harness {
    fn new() -> Self {
        Self {
            registry: Arc::new(InMemoryAnimalRegistry::new()),
            samples: Arc::new(InMemorySampleLog::new()),
        }
    }

    fn register(&self, name: &str, status: AnimalStatus) -> AnimalId {
        RegisterAnimalHandler::new(self.registry.clone())
            .handle(RegisterAnimalCommand {
                name: name.to_string(),
                tag: format!("BR-{name}"),
                breed: "Holstein".to_string(),
                birth_date: "2021-03-15".to_string(),
                status,
            })
            .unwrap()
    }

    fn record(&self, animal_id: AnimalId, date: &str, volume: &str, fat: &str, scc: &str) {
        RecordSampleHandler::new(self.registry.clone(), self.samples.clone())
            .handle(RecordSampleForm {
                animal_id,
                date: date.to_string(),
                volume: volume.to_string(),
                fat: fat.to_string(),
                protein: "3.2".to_string(),
                lactose: "4.5".to_string(),
                scc: scc.to_string(),
                temperature: "4.2".to_string(),
                ph: "6.7".to_string(),
            })
            .unwrap();
    }

    fn dashboard(&self) -> milkwatch::application::handlers::DashboardView {
        GetDashboardHandler::new(self.registry.clone(), self.samples.clone()).handle()
    }
}

#[test]
fn worked_scenario_matches_expected_metrics() {
    let harness = Harness::new();
    let cow = harness.register("Mimosa", AnimalStatus::Active);
    harness.record(cow, "2025-11-26", "25", "3.8", "180");
    harness.record(cow, "2025-11-27", "24", "3.7", "190");

    let view = harness.dashboard();
    assert_eq!(view.summary.active_animal_count, 1);
    assert_eq!(view.summary.total_volume, 49.0);
    assert!((view.summary.average_fat - 3.75).abs() < 1e-9);
    assert!((view.summary.average_scc - 185.0).abs() < 1e-9);
    assert_eq!(view.quality_tier, QualityTier::Excellent);

    // Chronological: the 26th before the 27th.
    assert_eq!(view.series.len(), 2);
    assert_eq!(view.series[0].volume, 25.0);
    assert_eq!(view.series[1].volume, 24.0);
}

#[test]
fn drying_off_an_animal_removes_its_production_row_but_not_its_samples() {
    let harness = Harness::new();
    let cow = harness.register("Mimosa", AnimalStatus::Active);
    harness.record(cow, "2025-11-27", "25", "3.8", "180");

    UpdateAnimalHandler::new(harness.registry.clone())
        .handle(UpdateAnimalCommand {
            id: cow,
            name: "Mimosa".to_string(),
            tag: "BR-Mimosa".to_string(),
            breed: "Holstein".to_string(),
            birth_date: "2021-03-15".to_string(),
            status: AnimalStatus::Inactive,
        })
        .unwrap();

    let view = harness.dashboard();
    assert_eq!(view.summary.active_animal_count, 0);
    // Herd totals still include the inactive animal's samples.
    assert_eq!(view.summary.total_volume, 25.0);
    assert!(view.production.is_empty());
    // The series still charts them too, under the animal's name.
    assert_eq!(view.series.len(), 1);
    assert_eq!(view.series[0].animal_name, "Mimosa");
}

#[test]
fn removing_an_animal_cascades_and_empties_its_views() {
    let harness = Harness::new();
    let kept = harness.register("Mimosa", AnimalStatus::Active);
    let removed = harness.register("Estrela", AnimalStatus::Active);
    harness.record(kept, "2025-11-27", "25", "3.8", "180");
    harness.record(removed, "2025-11-27", "22", "4.2", "150");
    harness.record(removed, "2025-11-26", "21", "4.1", "160");

    let dropped = RemoveAnimalHandler::new(harness.registry.clone(), harness.samples.clone())
        .handle(RemoveAnimalCommand { id: removed })
        .unwrap();
    assert_eq!(dropped, 2);

    let view = harness.dashboard();
    assert_eq!(view.summary.active_animal_count, 1);
    assert_eq!(view.summary.total_volume, 25.0);
    assert_eq!(view.production.len(), 1);
    assert_eq!(view.series.len(), 1);
}

#[test]
fn quality_tier_degrades_as_scc_climbs() {
    let harness = Harness::new();
    let cow = harness.register("Mimosa", AnimalStatus::Active);
    harness.record(cow, "2025-11-25", "25", "3.8", "180");
    assert_eq!(harness.dashboard().quality_tier, QualityTier::Excellent);

    harness.record(cow, "2025-11-26", "24", "3.7", "450");
    // Mean of 180 and 450 is 315: good.
    assert_eq!(harness.dashboard().quality_tier, QualityTier::Good);

    harness.record(cow, "2025-11-27", "23", "3.6", "900");
    // Mean of 180, 450 and 900 is 510: attention.
    assert_eq!(harness.dashboard().quality_tier, QualityTier::Attention);
    assert!(harness.dashboard().advisory.contains("attention"));
}
