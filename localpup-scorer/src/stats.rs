//! Composite score plus display metadata.

use localpup_core::{
    ALGORITHM_VERSION, CompositeScore, PlatformScore, RatedItem, RatingScorer, ScoringProfile,
};

use crate::convert::normalise_record;

/// Build the full [`CompositeScore`] for `item` under `profile`.
pub(crate) fn composite(profile: &ScoringProfile, item: &RatedItem, score: f64) -> CompositeScore {
    CompositeScore {
        score,
        available_platforms: item.available_platforms(),
        total_reviews: item.total_reviews(),
        algorithm_version: ALGORITHM_VERSION.to_owned(),
        platform_scores: platform_scores(profile, item),
    }
}

fn platform_scores(profile: &ScoringProfile, item: &RatedItem) -> Vec<PlatformScore> {
    item.iter()
        .filter_map(|(platform, record)| {
            let original_score = record.present_rating()?;
            let score = normalise_record(profile, platform, record)?;
            Some(PlatformScore {
                platform,
                score,
                original_score,
            })
        })
        .collect()
}

/// Composite score and metadata using the default platform profile.
///
/// # Examples
/// ```
/// use localpup_core::{Platform, RatedItem};
/// use localpup_scorer::rating_stats;
///
/// let item = RatedItem::new()
///     .with_rating(Platform::Booking, 9.0, 500)
///     .with_rating(Platform::Ctrip, 4.5, 2000);
/// let stats = rating_stats(&item);
/// assert_eq!(stats.score, 8.8);
/// assert_eq!(stats.available_platforms, 2);
/// assert_eq!(stats.total_reviews, 2500);
/// assert_eq!(stats.algorithm_version, "2.2");
/// ```
#[must_use]
pub fn rating_stats(item: &RatedItem) -> CompositeScore {
    crate::default_scorer().stats(item)
}
