//! Weighted composite aggregation.
//!
//! Platforms are split into the domestic and international groups recorded
//! in the [`ScoringProfile`]. Each group yields a sub-score, the sub-scores
//! are combined, and the result is anchored near the Booking.com rating
//! before being clamped to the display range.
//!
//! The domestic rescale `(average / 4) * 2.5 * 10` reproduces the production
//! arithmetic literally. It routinely lands far outside `0..=10` (about 29 for
//! a 9.4 Ctrip score) and only the anchoring step keeps the visible score
//! sane. [`ScoreBreakdown`] exposes the intermediates so regressions in either
//! stage show up in tests.

use localpup_core::{PlatformGroup, RatedItem, RatingScorer, ScoringProfile};

use crate::CompositeScorer;
use crate::confidence::confidence;
use crate::constants::aggregation::{
    DOMESTIC_DIVISOR, DOMESTIC_RESCALE_DIVISOR, DOMESTIC_RESCALE_FACTOR,
    DOMESTIC_RESCALE_MULTIPLIER, DOMESTIC_SHARE, INTERNATIONAL_SHARE, NO_DATA_SCORE,
};
use crate::constants::anchor::{
    ANCHOR_PLATFORM, COMPARISON_EPSILON, DEFAULT_ANCHOR, STEP, TOLERANCE,
};
use crate::convert::{normalise, round_to_tenth};

/// Intermediate values of one composite computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreBreakdown {
    /// Sum of converted domestic scores.
    pub(crate) domestic_total: f64,
    /// Sum of domestic confidence-scaled weights.
    pub(crate) domestic_weight: f64,
    /// Rescaled domestic sub-score; zero without domestic data.
    pub(crate) domestic_final: f64,
    /// Weighted mean of international scores; zero without data.
    pub(crate) international_final: f64,
    /// Combination of both groups before anchoring.
    pub(crate) combined: f64,
    /// Reference rating the combination was anchored to.
    pub(crate) anchor: f64,
    /// Whether the combination diverged enough to be pulled toward the anchor.
    pub(crate) anchor_adjusted: bool,
    /// Final display score.
    pub(crate) score: f64,
}

/// One platform's normalised score and aggregation weight.
#[derive(Debug, Clone, Copy)]
struct Contribution {
    score: f64,
    weight: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "weights scale the platform authority by review confidence"
)]
fn contributions<'a>(
    profile: &'a ScoringProfile,
    item: &'a RatedItem,
    group: PlatformGroup,
) -> impl Iterator<Item = Contribution> + 'a {
    profile.group(group).filter_map(move |(platform, entry)| {
        let record = item.get(platform)?;
        let rating = record.present_rating()?;
        Some(Contribution {
            score: normalise(rating, entry.scale(), record.review_count),
            weight: entry.weight() * confidence(record.review_count),
        })
    })
}

#[derive(Debug, Clone, Copy)]
struct DomesticGroup {
    total: f64,
    weight: f64,
    rescaled: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "the domestic group sums, halves, and rescales converted scores"
)]
fn domestic_group(profile: &ScoringProfile, item: &RatedItem) -> DomesticGroup {
    let (total, weight) = contributions(profile, item, PlatformGroup::Domestic).fold(
        (0.0_f64, 0.0_f64),
        |(total, weight), contribution| (total + contribution.score, weight + contribution.weight),
    );
    let rescaled = if weight > 0.0_f64 {
        let average = total / DOMESTIC_DIVISOR;
        (average / DOMESTIC_RESCALE_DIVISOR) * DOMESTIC_RESCALE_FACTOR * DOMESTIC_RESCALE_MULTIPLIER
    } else {
        0.0_f64
    };
    if rescaled > 10.0_f64 {
        log::debug!("domestic sub-score {rescaled} exceeds the ten-point scale");
    }
    DomesticGroup {
        total,
        weight,
        rescaled,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the international group is a weighted arithmetic mean"
)]
fn international_group(profile: &ScoringProfile, item: &RatedItem) -> f64 {
    let (weighted_sum, total_weight) =
        contributions(profile, item, PlatformGroup::International).fold(
            (0.0_f64, 0.0_f64),
            |(sum, weight), contribution| {
                (
                    sum + contribution.score * contribution.weight,
                    weight + contribution.weight,
                )
            },
        );
    if total_weight > 0.0_f64 {
        weighted_sum / total_weight
    } else {
        0.0_f64
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "group sub-scores are blended by fixed shares"
)]
fn combine(domestic: f64, international: f64) -> f64 {
    match (domestic > 0.0_f64, international > 0.0_f64) {
        (true, true) => domestic * DOMESTIC_SHARE + international * INTERNATIONAL_SHARE,
        (false, true) => international,
        (true, false) => domestic,
        (false, false) => NO_DATA_SCORE,
    }
}

/// Pull `combined` to within [`STEP`] of `anchor` when it diverges by more
/// than [`TOLERANCE`]. Returns the adjusted value and whether it moved.
#[expect(
    clippy::float_arithmetic,
    reason = "anchoring compares and steps relative to the reference rating"
)]
fn anchor_toward(combined: f64, anchor: f64) -> (f64, bool) {
    let divergence = (combined - anchor).abs();
    if divergence - TOLERANCE > COMPARISON_EPSILON {
        let adjusted = if combined > anchor {
            anchor - STEP
        } else {
            anchor + STEP
        };
        log::debug!("composite {combined} diverges from anchor {anchor}; adjusted to {adjusted}");
        (adjusted, true)
    } else {
        (combined, false)
    }
}

/// Run the full pipeline, keeping every intermediate value.
pub(crate) fn breakdown(profile: &ScoringProfile, item: &RatedItem) -> ScoreBreakdown {
    let domestic = domestic_group(profile, item);
    let international_final = international_group(profile, item);
    let combined = combine(domestic.rescaled, international_final);
    let anchor = item
        .present_rating(ANCHOR_PLATFORM)
        .unwrap_or(DEFAULT_ANCHOR);
    let (anchored, anchor_adjusted) = anchor_toward(combined, anchor);
    let score = round_to_tenth(CompositeScorer::sanitise(anchored));
    ScoreBreakdown {
        domestic_total: domestic.total,
        domestic_weight: domestic.weight,
        domestic_final: domestic.rescaled,
        international_final,
        combined,
        anchor,
        anchor_adjusted,
        score,
    }
}

/// Composite display score using the default platform profile.
///
/// # Examples
/// ```
/// use localpup_core::{Platform, RatedItem};
/// use localpup_scorer::calculate_weighted_score;
///
/// let item = RatedItem::new()
///     .with_rating(Platform::Booking, 9.0, 500)
///     .with_rating(Platform::Ctrip, 4.5, 2000);
/// assert_eq!(calculate_weighted_score(&item), 8.8);
/// assert_eq!(calculate_weighted_score(&RatedItem::new()), 8.5);
/// ```
#[must_use]
pub fn calculate_weighted_score(item: &RatedItem) -> f64 {
    crate::default_scorer().weighted_score(item)
}
