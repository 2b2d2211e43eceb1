//! RemoveAnimalHandler - removes an animal and cascades to its samples.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::AnimalId;
use crate::ports::{AnimalRegistry, SampleLog};

use super::CommandError;

#[derive(Debug, Clone, Copy)]
pub struct RemoveAnimalCommand {
    pub id: AnimalId,
}

/// Handler for animal removal.
///
/// The registry and the sample log are separate stores, so the cascade is
/// coordinated here: the animal goes first, then every sample it owned.
pub struct RemoveAnimalHandler {
    registry: Arc<dyn AnimalRegistry>,
    samples: Arc<dyn SampleLog>,
}

impl RemoveAnimalHandler {
    pub fn new(registry: Arc<dyn AnimalRegistry>, samples: Arc<dyn SampleLog>) -> Self {
        Self { registry, samples }
    }

    /// Returns how many samples were removed in the cascade.
    pub fn handle(&self, command: RemoveAnimalCommand) -> Result<usize, CommandError> {
        let animal = self.registry.remove(command.id)?;
        let dropped = self.samples.remove_for_animal(command.id);
        info!(animal_id = %command.id, name = animal.name(), dropped, "animal removed with cascade");
        Ok(dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAnimalRegistry, InMemorySampleLog};
    use crate::domain::foundation::SampleId;
    use crate::domain::herd::{Animal, AnimalStatus, Measurements, QualitySample};
    use crate::ports::RegistryError;
    use chrono::NaiveDate;

    fn animal(name: &str) -> Animal {
        Animal::new(
            AnimalId::new(),
            name.to_string(),
            "T-01".to_string(),
            "Holstein".to_string(),
            NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            AnimalStatus::Active,
        )
        .unwrap()
    }

    fn sample(animal_id: AnimalId) -> QualitySample {
        QualitySample::new(
            SampleId::new(),
            animal_id,
            NaiveDate::from_ymd_opt(2025, 11, 27).unwrap(),
            Measurements {
                volume: 25.0,
                fat: 3.8,
                protein: 3.2,
                lactose: 4.5,
                scc: 180.0,
                temperature: 4.2,
                ph: 6.7,
            },
        )
        .unwrap()
    }

    #[test]
    fn removal_cascades_to_owned_samples() {
        let registry = Arc::new(InMemoryAnimalRegistry::new());
        let samples = Arc::new(InMemorySampleLog::new());

        let removed = animal("Mimosa");
        let kept = animal("Estrela");
        registry.add(removed.clone()).unwrap();
        registry.add(kept.clone()).unwrap();
        samples.add(sample(removed.id())).unwrap();
        samples.add(sample(removed.id())).unwrap();
        samples.add(sample(kept.id())).unwrap();

        let handler = RemoveAnimalHandler::new(registry.clone(), samples.clone());
        let dropped = handler
            .handle(RemoveAnimalCommand { id: removed.id() })
            .unwrap();

        assert_eq!(dropped, 2);
        assert!(registry.find_by_id(removed.id()).is_none());
        assert_eq!(samples.list().len(), 1);
        assert_eq!(samples.list()[0].animal_id(), kept.id());
    }

    #[test]
    fn removing_an_unknown_animal_fails_without_touching_samples() {
        let registry = Arc::new(InMemoryAnimalRegistry::new());
        let samples = Arc::new(InMemorySampleLog::new());
        let orphan_owner = AnimalId::new();
        samples.add(sample(orphan_owner)).unwrap();

        let handler = RemoveAnimalHandler::new(registry, samples.clone());
        let result = handler.handle(RemoveAnimalCommand { id: orphan_owner });

        assert!(matches!(
            result,
            Err(CommandError::Registry(RegistryError::AnimalNotFound(_)))
        ));
        assert_eq!(samples.list().len(), 1);
    }
}
