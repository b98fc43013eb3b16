//! Review-volume confidence factors.

use crate::constants::confidence::{
    FEW_REVIEWS, MANY_REVIEWS, MANY_REVIEWS_FROM, NO_REVIEWS, SATURATED, SATURATED_FROM,
    SOME_REVIEWS, SOME_REVIEWS_FROM,
};

/// Map a review count to a confidence factor in `0.5..=1.0`.
///
/// The factor is a non-decreasing step function of the count. Absent, zero,
/// and negative counts all mean "no reviews".
///
/// # Examples
/// ```
/// use localpup_scorer::confidence;
///
/// assert_eq!(confidence(None), 0.5);
/// assert_eq!(confidence(Some(50)), 0.7);
/// assert_eq!(confidence(Some(5000)), 1.0);
/// ```
#[must_use]
pub fn confidence(review_count: Option<i64>) -> f64 {
    let count = review_count.unwrap_or(0).max(0);
    if count >= SATURATED_FROM {
        SATURATED
    } else if count >= MANY_REVIEWS_FROM {
        MANY_REVIEWS
    } else if count >= SOME_REVIEWS_FROM {
        SOME_REVIEWS
    } else if count > 0 {
        FEW_REVIEWS
    } else {
        NO_REVIEWS
    }
}
