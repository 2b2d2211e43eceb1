//! Quality analytics engine.
//!
//! Pure transforms from (animals, samples) snapshots to the derived views
//! the dashboard renders. Every function here is total, side-effect free
//! and recomputes from scratch; there is no cached or incremental state.

pub mod classification;
pub mod production;
pub mod series;
pub mod summary;

pub use classification::{classify, QualityTier, EXCELLENT_SCC_LIMIT, GOOD_SCC_LIMIT};
pub use production::{per_animal_production, ProductionRow};
pub use series::{build_series, SeriesPoint, UNKNOWN_ANIMAL};
pub use summary::{summarize, HerdSummary};
