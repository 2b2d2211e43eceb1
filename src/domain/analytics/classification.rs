//! Milk quality classification by somatic cell count.

use serde::Serialize;
use std::fmt;

/// Average SCC below this (thousand/ml) classifies as excellent.
pub const EXCELLENT_SCC_LIMIT: f64 = 200.0;

/// Average SCC below this (and at or above the excellent limit)
/// classifies as good; anything at or above it needs attention.
pub const GOOD_SCC_LIMIT: f64 = 400.0;

/// Quality tier derived from average somatic cell count.
///
/// Ordered from best to worst, so tiers compare with `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Excellent,
    Good,
    Attention,
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityTier::Excellent => "excellent",
            QualityTier::Good => "good",
            QualityTier::Attention => "attention",
        };
        write!(f, "{label}")
    }
}

/// Maps an average SCC to its quality tier.
///
/// This is the single classification primitive for the whole system; the
/// assistant's advisory text is derived from it rather than re-deriving
/// the thresholds.
pub fn classify(avg_scc: f64) -> QualityTier {
    if avg_scc < EXCELLENT_SCC_LIMIT {
        QualityTier::Excellent
    } else if avg_scc < GOOD_SCC_LIMIT {
        QualityTier::Good
    } else {
        QualityTier::Attention
    }
}

#[cfg(test)]
#[path = "classification_test.rs"]
mod classification_test;
