//! In-memory animal registry.

use std::sync::RwLock;

use tracing::info;

use crate::domain::foundation::AnimalId;
use crate::domain::herd::Animal;
use crate::ports::{AnimalRegistry, RegistryError};

/// In-memory registry table.
///
/// Insertion-ordered; lookups are linear scans, which is fine at the
/// scale of a single herd.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned, which can only happen
/// after another panic mid-mutation.
pub struct InMemoryAnimalRegistry {
    animals: RwLock<Vec<Animal>>,
}

impl InMemoryAnimalRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            animals: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAnimalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimalRegistry for InMemoryAnimalRegistry {
    fn add(&self, animal: Animal) -> Result<(), RegistryError> {
        let mut animals = self
            .animals
            .write()
            .expect("InMemoryAnimalRegistry: lock poisoned");
        if animals.iter().any(|a| a.id() == animal.id()) {
            return Err(RegistryError::DuplicateAnimal(animal.id()));
        }
        info!(animal_id = %animal.id(), name = animal.name(), "animal registered");
        animals.push(animal);
        Ok(())
    }

    fn update(&self, animal: Animal) -> Result<(), RegistryError> {
        let mut animals = self
            .animals
            .write()
            .expect("InMemoryAnimalRegistry: lock poisoned");
        match animals.iter_mut().find(|a| a.id() == animal.id()) {
            Some(slot) => {
                info!(animal_id = %animal.id(), "animal updated");
                *slot = animal;
                Ok(())
            }
            None => Err(RegistryError::AnimalNotFound(animal.id())),
        }
    }

    fn remove(&self, id: AnimalId) -> Result<Animal, RegistryError> {
        let mut animals = self
            .animals
            .write()
            .expect("InMemoryAnimalRegistry: lock poisoned");
        let index = animals
            .iter()
            .position(|a| a.id() == id)
            .ok_or(RegistryError::AnimalNotFound(id))?;
        info!(animal_id = %id, "animal removed");
        Ok(animals.remove(index))
    }

    fn find_by_id(&self, id: AnimalId) -> Option<Animal> {
        self.animals
            .read()
            .expect("InMemoryAnimalRegistry: lock poisoned")
            .iter()
            .find(|a| a.id() == id)
            .cloned()
    }

    fn list(&self) -> Vec<Animal> {
        self.animals
            .read()
            .expect("InMemoryAnimalRegistry: lock poisoned")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::herd::AnimalStatus;
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

    #[test]
    fn list_preserves_registration_order() {
        let registry = InMemoryAnimalRegistry::new();
        registry.add(animal("Mimosa")).unwrap();
        registry.add(animal("Estrela")).unwrap();
        registry.add(animal("Flor")).unwrap();

        let names: Vec<String> = registry.list().iter().map(|a| a.name().to_string()).collect();
        assert_eq!(names, vec!["Mimosa", "Estrela", "Flor"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let registry = InMemoryAnimalRegistry::new();
        let cow = animal("Mimosa");
        registry.add(cow.clone()).unwrap();
        assert!(matches!(
            registry.add(cow),
            Err(RegistryError::DuplicateAnimal(_))
        ));
    }

    #[test]
    fn update_of_missing_animal_fails() {
        let registry = InMemoryAnimalRegistry::new();
        assert!(matches!(
            registry.update(animal("Ghost")),
            Err(RegistryError::AnimalNotFound(_))
        ));
    }

    #[test]
    fn remove_returns_the_animal() {
        let registry = InMemoryAnimalRegistry::new();
        let cow = animal("Mimosa");
        let id = cow.id();
        registry.add(cow).unwrap();

        let removed = registry.remove(id).unwrap();
        assert_eq!(removed.name(), "Mimosa");
        assert!(registry.find_by_id(id).is_none());
        assert!(registry.list().is_empty());
    }
}
