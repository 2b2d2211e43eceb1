//! Scripted helper for operators, answering how-to questions about the tool.

pub mod responder;

pub use responder::{respond, scc_advisory};
