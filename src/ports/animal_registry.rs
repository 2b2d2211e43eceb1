//! Animal registry port.
//!
//! Contract for the store that owns `Animal` entities. The analytics
//! engine never mutates through this port; it only takes the read-only
//! snapshot from `list`.

use crate::domain::foundation::AnimalId;
use crate::domain::herd::Animal;

/// Errors that can occur against the animal registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Animal not found: {0}")]
    AnimalNotFound(AnimalId),

    #[error("Animal already registered: {0}")]
    DuplicateAnimal(AnimalId),
}

/// Store port for the animal registry.
///
/// Implementations must keep insertion order: `list` is the ordering
/// authority for every derived view.
pub trait AnimalRegistry: Send + Sync {
    /// Adds a newly registered animal.
    ///
    /// # Errors
    ///
    /// - `DuplicateAnimal` if the id is already present
    fn add(&self, animal: Animal) -> Result<(), RegistryError>;

    /// Replaces the stored animal with the same id.
    ///
    /// # Errors
    ///
    /// - `AnimalNotFound` if the id is unknown
    fn update(&self, animal: Animal) -> Result<(), RegistryError>;

    /// Removes an animal, returning it.
    ///
    /// Cascading the animal's samples is the caller's job; the registry
    /// does not know about the sample log.
    ///
    /// # Errors
    ///
    /// - `AnimalNotFound` if the id is unknown
    fn remove(&self, id: AnimalId) -> Result<Animal, RegistryError>;

    /// Looks up one animal by id.
    fn find_by_id(&self, id: AnimalId) -> Option<Animal>;

    /// Read-only snapshot of all animals, in registration order.
    fn list(&self) -> Vec<Animal>;
}
