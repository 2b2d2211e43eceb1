//! Demo binary: seeds the in-memory stores with a small herd and prints
//! the dashboard view as JSON.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use milkwatch::adapters::memory::{InMemoryAnimalRegistry, InMemorySampleLog};
use milkwatch::application::handlers::{
    GetDashboardHandler, RecordSampleForm, RecordSampleHandler, RegisterAnimalCommand,
    RegisterAnimalHandler,
};
use milkwatch::domain::assistant;
use milkwatch::domain::herd::AnimalStatus;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("milkwatch v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(InMemoryAnimalRegistry::new());
    let samples = Arc::new(InMemorySampleLog::new());

    let register = RegisterAnimalHandler::new(registry.clone());
    let record = RecordSampleHandler::new(registry.clone(), samples.clone());

    let mimosa = register.handle(RegisterAnimalCommand {
        name: "Mimosa".to_string(),
        tag: "BR001".to_string(),
        breed: "Holstein".to_string(),
        birth_date: "2021-03-15".to_string(),
        status: AnimalStatus::Active,
    })?;
    let estrela = register.handle(RegisterAnimalCommand {
        name: "Estrela".to_string(),
        tag: "BR002".to_string(),
        breed: "Jersey".to_string(),
        birth_date: "2020-07-22".to_string(),
        status: AnimalStatus::Active,
    })?;

    for (animal_id, date, volume, fat, protein, lactose, scc, temperature, ph) in [
        (mimosa, "2025-11-27", "25", "3.8", "3.2", "4.5", "180", "4.2", "6.7"),
        (estrela, "2025-11-27", "22", "4.2", "3.5", "4.6", "150", "4.0", "6.6"),
        (mimosa, "2025-11-26", "24", "3.7", "3.1", "4.4", "190", "4.3", "6.7"),
    ] {
        record.handle(RecordSampleForm {
            animal_id,
            date: date.to_string(),
            volume: volume.to_string(),
            fat: fat.to_string(),
            protein: protein.to_string(),
            lactose: lactose.to_string(),
            scc: scc.to_string(),
            temperature: temperature.to_string(),
            ph: ph.to_string(),
        })?;
    }

    let view = GetDashboardHandler::new(registry, samples).handle();
    println!("{}", serde_json::to_string_pretty(&view)?);
    println!();
    println!("assistant: {}", assistant::respond("what is scc?"));

    Ok(())
}
