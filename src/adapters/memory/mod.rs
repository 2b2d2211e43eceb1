//! In-memory store implementations.
//!
//! The whole tool is in-process with no persistence, so these are the
//! production stores, not test doubles.

pub mod animal_registry;
pub mod sample_log;

pub use animal_registry::InMemoryAnimalRegistry;
pub use sample_log::InMemorySampleLog;
