//! RegisterAnimalHandler - registers a new animal from form input.

use std::sync::Arc;

use crate::domain::foundation::AnimalId;
use crate::domain::herd::{Animal, AnimalStatus};
use crate::ports::AnimalRegistry;

use super::{parse_date, CommandError};

/// Raw registration form data. The birth date arrives as form text and is
/// parsed here, before the entity exists.
#[derive(Debug, Clone)]
pub struct RegisterAnimalCommand {
    pub name: String,
    pub tag: String,
    pub breed: String,
    /// ISO `YYYY-MM-DD`.
    pub birth_date: String,
    pub status: AnimalStatus,
}

/// Handler for animal registration.
pub struct RegisterAnimalHandler {
    registry: Arc<dyn AnimalRegistry>,
}

impl RegisterAnimalHandler {
    pub fn new(registry: Arc<dyn AnimalRegistry>) -> Self {
        Self { registry }
    }

    /// Validates the form, assigns an id, and stores the animal.
    pub fn handle(&self, command: RegisterAnimalCommand) -> Result<AnimalId, CommandError> {
        let birth_date = parse_date("birth_date", &command.birth_date)?;
        let animal = Animal::new(
            AnimalId::new(),
            command.name,
            command.tag,
            command.breed,
            birth_date,
            command.status,
        )?;
        let id = animal.id();
        self.registry.add(animal)?;
        Ok(id)
    }
}
