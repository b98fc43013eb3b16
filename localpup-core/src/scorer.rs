//! Reduce a listed entity's platform ratings to one composite score.
//!
//! The `RatingScorer` trait is the seam between the scoring arithmetic and
//! its consumers (ranking, presentation, persistence).

use crate::{CompositeScore, FINAL_SCORE_MAX, FINAL_SCORE_MIN, RatedItem};

/// Calculate composite scores for rated items.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so callers can score
/// collections in parallel. Both methods are infallible and deterministic:
/// identical input yields bit-identical output.
///
/// Implementations must:
/// - Produce finite scores.
/// - Return values in `FINAL_SCORE_MIN..=FINAL_SCORE_MAX`.
///
/// Use [`RatingScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use localpup_core::{ALGORITHM_VERSION, CompositeScore, RatedItem, RatingScorer};
///
/// struct FlatScorer;
///
/// impl RatingScorer for FlatScorer {
///     fn weighted_score(&self, _item: &RatedItem) -> f64 {
///         8.0
///     }
///
///     fn stats(&self, item: &RatedItem) -> CompositeScore {
///         CompositeScore {
///             score: self.weighted_score(item),
///             available_platforms: item.available_platforms(),
///             total_reviews: item.total_reviews(),
///             algorithm_version: ALGORITHM_VERSION.to_owned(),
///             platform_scores: Vec::new(),
///         }
///     }
/// }
///
/// assert_eq!(FlatScorer.weighted_score(&RatedItem::new()), 8.0);
/// assert_eq!(FlatScorer::sanitise(12.0), 9.8);
/// ```
pub trait RatingScorer: Send + Sync {
    /// Return the composite display score for `item`.
    fn weighted_score(&self, item: &RatedItem) -> f64;

    /// Return the composite score together with its metadata.
    fn stats(&self, item: &RatedItem) -> CompositeScore;

    /// Clamp a raw score into the display range.
    ///
    /// Non-finite values collapse to `FINAL_SCORE_MIN`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return FINAL_SCORE_MIN;
        }
        score.clamp(FINAL_SCORE_MIN, FINAL_SCORE_MAX)
    }
}

/// Records that carry platform ratings and can therefore be ranked.
pub trait Rated {
    /// Borrow the record's platform ratings.
    fn ratings(&self) -> &RatedItem;
}

impl Rated for RatedItem {
    fn ratings(&self) -> &RatedItem {
        self
    }
}

impl<T: Rated + ?Sized> Rated for &T {
    fn ratings(&self) -> &RatedItem {
        (**self).ratings()
    }
}
