//! Store contracts the application layer depends on.

pub mod animal_registry;
pub mod sample_log;

pub use animal_registry::{AnimalRegistry, RegistryError};
pub use sample_log::{SampleLog, SampleLogError};
