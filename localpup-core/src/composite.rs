//! Composite score results returned to consumers.

use crate::Platform;

/// Version tag of the scoring arithmetic.
///
/// Consumers that persist scores compare this tag before reusing them.
pub const ALGORITHM_VERSION: &str = "2.2";

/// Lowest composite score ever returned.
pub const FINAL_SCORE_MIN: f64 = 7.0;
/// Highest composite score ever returned.
pub const FINAL_SCORE_MAX: f64 = 9.8;

/// One platform's contribution, normalised to ten points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlatformScore {
    /// Source platform.
    pub platform: Platform,
    /// Rating on the common ten-point scale.
    pub score: f64,
    /// Rating as published on the platform's native scale.
    pub original_score: f64,
}

/// Composite score plus metadata for one listed entity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompositeScore {
    /// Display score in `FINAL_SCORE_MIN..=FINAL_SCORE_MAX`, one decimal place.
    pub score: f64,
    /// Platforms that reported a positive rating.
    pub available_platforms: usize,
    /// Sum of all review counts.
    pub total_reviews: u64,
    /// Version of the arithmetic that produced `score`.
    pub algorithm_version: String,
    /// Per-platform normalised ratings in registry order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub platform_scores: Vec<PlatformScore>,
}

impl CompositeScore {
    /// Report whether the score came from the current arithmetic.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.algorithm_version == ALGORITHM_VERSION
    }
}
