//! UpdateAnimalHandler - edits a registered animal in place.

use std::sync::Arc;

use crate::domain::foundation::AnimalId;
use crate::domain::herd::AnimalStatus;
use crate::ports::{AnimalRegistry, RegistryError};

use super::{parse_date, CommandError};

/// Raw edit form data. Every field except the id is replaced.
#[derive(Debug, Clone)]
pub struct UpdateAnimalCommand {
    pub id: AnimalId,
    pub name: String,
    pub tag: String,
    pub breed: String,
    /// ISO `YYYY-MM-DD`.
    pub birth_date: String,
    pub status: AnimalStatus,
}

/// Handler for animal edits.
pub struct UpdateAnimalHandler {
    registry: Arc<dyn AnimalRegistry>,
}

impl UpdateAnimalHandler {
    pub fn new(registry: Arc<dyn AnimalRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, command: UpdateAnimalCommand) -> Result<(), CommandError> {
        let birth_date = parse_date("birth_date", &command.birth_date)?;
        let mut animal = self
            .registry
            .find_by_id(command.id)
            .ok_or(RegistryError::AnimalNotFound(command.id))?;
        animal.update(
            command.name,
            command.tag,
            command.breed,
            birth_date,
            command.status,
        )?;
        self.registry.update(animal)?;
        Ok(())
    }
}
