//! Rating normalisation and weighted composite scoring for Localpup listings.
//!
//! The crate reduces heterogeneous per-platform ratings for one hotel to a
//! single bounded composite score. Three pure stages run in order:
//! - **Confidence estimation** maps a review count to a factor in
//!   `0.5..=1.0` ([`confidence`]).
//! - **Scale conversion** maps five-point ratings onto ten points with a
//!   platform bonus and a review-volume bonus ([`convert_5_to_10`]).
//! - **Composite aggregation** weighs the domestic and international groups,
//!   combines them, anchors the result near the Booking.com rating, and
//!   clamps it to `7.0..=9.8` ([`calculate_weighted_score`], [`rating_stats`]).
//!
//! [`CompositeScorer`] runs the same pipeline against an injected
//! [`ScoringProfile`] and implements the
//! [`RatingScorer`](localpup_core::RatingScorer) trait so ranking helpers and
//! consumers can plug it in. Nothing is cached: every call recomputes from the
//! supplied ratings, so a scorer can be shared across threads freely.
//!
//! # Examples
//!
//! ```
//! use localpup_core::{Platform, RatedItem, RatingScorer};
//! use localpup_scorer::CompositeScorer;
//!
//! let scorer = CompositeScorer::default();
//! let item = RatedItem::new()
//!     .with_rating(Platform::Booking, 9.0, 500)
//!     .with_rating(Platform::Ctrip, 4.5, 2000);
//! assert_eq!(scorer.weighted_score(&item), 8.8);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::LazyLock;

use localpup_core::{CompositeScore, Platform, RatedItem, RatingScorer, ScoringProfile};

mod aggregate;
mod confidence;
pub mod constants;
mod convert;
pub mod ranking;
mod stats;

pub use aggregate::calculate_weighted_score;
pub use confidence::confidence;
pub use convert::convert_5_to_10;
pub use ranking::{Ranked, RatingSummary, ScoreRange, rank, summarise, top_rated};
pub use stats::rating_stats;

static DEFAULT_SCORER: LazyLock<CompositeScorer> = LazyLock::new(CompositeScorer::default);

/// Scorer configured with the production platform profile.
pub(crate) fn default_scorer() -> &'static CompositeScorer {
    &DEFAULT_SCORER
}

/// Composite scorer bound to an immutable platform profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeScorer {
    profile: ScoringProfile,
}

impl CompositeScorer {
    /// Construct a scorer around `profile`.
    #[must_use]
    pub const fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    /// Borrow the platform profile in use.
    #[must_use]
    pub const fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Convert a five-point rating using this scorer's adjustment table.
    #[must_use]
    pub fn convert_5_to_10(
        &self,
        rating5: f64,
        platform: Platform,
        review_count: Option<i64>,
    ) -> f64 {
        convert::convert_with_adjustment(rating5, self.profile.adjustment(platform), review_count)
    }

    /// Pre-anchor intermediates for regression tests and debugging.
    pub(crate) fn breakdown(&self, item: &RatedItem) -> aggregate::ScoreBreakdown {
        aggregate::breakdown(&self.profile, item)
    }
}

impl RatingScorer for CompositeScorer {
    fn weighted_score(&self, item: &RatedItem) -> f64 {
        self.breakdown(item).score
    }

    fn stats(&self, item: &RatedItem) -> CompositeScore {
        stats::composite(&self.profile, item, self.weighted_score(item))
    }
}
