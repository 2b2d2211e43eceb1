//! Application layer: the use-case handlers.

pub mod handlers;

pub use handlers::CommandError;
