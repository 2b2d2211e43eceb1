//! Herd entities: registered animals and their quality samples.

pub mod animal;
pub mod sample;

pub use animal::{Animal, AnimalStatus, MAX_NAME_LENGTH};
pub use sample::{Measurements, QualitySample};
