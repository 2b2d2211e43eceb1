//! Implementations of the store ports.

pub mod memory;
