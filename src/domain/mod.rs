//! Domain layer: herd entities, the analytics engine and the assistant.

pub mod analytics;
pub mod assistant;
pub mod foundation;
pub mod herd;
