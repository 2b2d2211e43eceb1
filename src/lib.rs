//! Milkwatch - herd management and milk-quality analytics.
//!
//! Operators register animals, log per-sample quality measurements, and
//! read a dashboard of derived herd metrics. The analytics engine in
//! [`domain::analytics`] is pure: it recomputes every view from store
//! snapshots on each query.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
