//! Ranking and summary statistics across many listed entities.
//!
//! Every entity is scored independently, so these helpers only sort and fold
//! per-entity results; they never mix one entity's data into another's score.

use std::collections::BTreeMap;

use localpup_core::{CompositeScore, Platform, Rated, RatingScorer};

/// An item paired with its composite score.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<'a, T> {
    /// The scored item.
    pub item: &'a T,
    /// Composite score and metadata.
    pub composite: CompositeScore,
}

/// Score `items` and sort them by composite score, best first.
///
/// Equal scores keep their input order.
///
/// # Examples
/// ```
/// use localpup_core::{Platform, RatedItem};
/// use localpup_scorer::{CompositeScorer, rank};
///
/// let items = vec![
///     RatedItem::new().with_rating(Platform::Booking, 7.9, 300),
///     RatedItem::new().with_rating(Platform::Booking, 9.2, 300),
/// ];
/// let ranked = rank(&CompositeScorer::default(), &items);
/// assert_eq!(ranked[0].composite.score, 9.2);
/// ```
pub fn rank<'a, S, T>(scorer: &S, items: &'a [T]) -> Vec<Ranked<'a, T>>
where
    S: RatingScorer + ?Sized,
    T: Rated,
{
    let mut ranked: Vec<Ranked<'a, T>> = items
        .iter()
        .map(|item| Ranked {
            item,
            composite: scorer.stats(item.ratings()),
        })
        .collect();
    ranked.sort_by(|left, right| right.composite.score.total_cmp(&left.composite.score));
    ranked
}

/// Return the best `percentage` of `items`, always at least one when any exist.
///
/// `percentage` is clamped to `0..=100`; the count is floored.
pub fn top_rated<'a, S, T>(scorer: &S, items: &'a [T], percentage: u8) -> Vec<Ranked<'a, T>>
where
    S: RatingScorer + ?Sized,
    T: Rated,
{
    let mut ranked = rank(scorer, items);
    ranked.truncate(top_count(ranked.len(), percentage));
    ranked
}

#[expect(
    clippy::integer_division,
    reason = "the selected count is floored by design of the listing pages"
)]
fn top_count(len: usize, percentage: u8) -> usize {
    if len == 0 {
        return 0;
    }
    let pct = usize::from(percentage.min(100));
    (len.saturating_mul(pct) / 100).max(1)
}

/// Minimum, maximum, and mean over a population of scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    /// Smallest observed score.
    pub min: f64,
    /// Largest observed score.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Number of observations.
    pub count: usize,
}

impl ScoreRange {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean divides a float sum by the observation count"
    )]
    fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = values.iter().sum();
        Some(Self {
            min,
            max,
            mean: sum / values.len() as f64,
            count: values.len(),
        })
    }
}

/// Summary of composite and per-platform scores over many items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingSummary {
    /// Composite score range; `None` for an empty population.
    pub overall: Option<ScoreRange>,
    /// Normalised ten-point range per platform, over items where it reported.
    pub platforms: BTreeMap<Platform, ScoreRange>,
}

/// Summarise composite and per-platform scores across `items`.
///
/// Platforms that never reported are omitted rather than counted as zero.
pub fn summarise<S, T>(scorer: &S, items: &[T]) -> RatingSummary
where
    S: RatingScorer + ?Sized,
    T: Rated,
{
    let mut overall = Vec::with_capacity(items.len());
    let mut per_platform: BTreeMap<Platform, Vec<f64>> = BTreeMap::new();
    for item in items {
        let composite = scorer.stats(item.ratings());
        overall.push(composite.score);
        for entry in composite.platform_scores {
            per_platform.entry(entry.platform).or_default().push(entry.score);
        }
    }
    RatingSummary {
        overall: ScoreRange::from_values(&overall),
        platforms: per_platform
            .into_iter()
            .filter_map(|(platform, values)| {
                ScoreRange::from_values(&values).map(|range| (platform, range))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompositeScorer;
    use localpup_core::RatedItem;
    use rstest::{fixture, rstest};

    #[fixture]
    fn scorer() -> CompositeScorer {
        CompositeScorer::default()
    }

    fn booking(rating: f64) -> RatedItem {
        RatedItem::new().with_rating(Platform::Booking, rating, 800)
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(5, 10, 1)]
    #[case(10, 10, 1)]
    #[case(25, 10, 2)]
    #[case(40, 0, 1)]
    #[case(40, 250, 40)]
    fn top_count_floors_with_minimum_of_one(
        #[case] len: usize,
        #[case] percentage: u8,
        #[case] expected: usize,
    ) {
        assert_eq!(top_count(len, percentage), expected);
    }

    #[rstest]
    fn ties_keep_input_order(scorer: CompositeScorer) {
        let items = vec![booking(8.4), booking(9.0), booking(8.4)];
        let ranked = rank(&scorer, &items);
        let scores: Vec<f64> = ranked.iter().map(|entry| entry.composite.score).collect();
        assert_eq!(scores, vec![9.0, 8.4, 8.4]);
        assert!(std::ptr::eq(ranked[1].item, &items[0]));
        assert!(std::ptr::eq(ranked[2].item, &items[2]));
    }

    #[rstest]
    fn top_rated_returns_the_best(scorer: CompositeScorer) {
        let items: Vec<RatedItem> = [7.2, 9.5, 8.1, 8.9].into_iter().map(booking).collect();
        let top = top_rated(&scorer, &items, 50);
        let scores: Vec<f64> = top.iter().map(|entry| entry.composite.score).collect();
        assert_eq!(scores, vec![9.5, 8.9]);
    }

    #[rstest]
    fn empty_population_has_no_summary(scorer: CompositeScorer) {
        let items: Vec<RatedItem> = Vec::new();
        let summary = summarise(&scorer, &items);
        assert_eq!(summary, RatingSummary::default());
        assert!(top_rated(&scorer, &items, 10).is_empty());
    }

    #[rstest]
    fn summary_skips_platforms_without_data(scorer: CompositeScorer) {
        let items = vec![
            booking(8.0),
            booking(9.0).with_rating(Platform::Ctrip, 4.5, 2000),
        ];
        let summary = summarise(&scorer, &items);
        let overall = summary.overall.expect("overall range");
        assert_eq!(overall.count, 2);
        assert_eq!(overall.min, 8.0);
        assert_eq!(overall.max, 8.8);
        let booking_range = summary.platforms[&Platform::Booking];
        assert!((booking_range.mean - 8.5).abs() < 1e-9);
        let ctrip_range = summary.platforms[&Platform::Ctrip];
        assert_eq!(ctrip_range.count, 1);
        assert_eq!(ctrip_range.max, 9.4);
        assert!(!summary.platforms.contains_key(&Platform::Agoda));
    }
}
