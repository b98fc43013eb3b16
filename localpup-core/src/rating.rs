//! Per-platform ratings for a single listed entity.
//!
//! A [`RatedItem`] maps each [`Platform`] to the rating and review volume it
//! reported. Absent platforms, missing ratings, and non-positive or non-finite
//! ratings all mean "no data from this platform".

use std::collections::BTreeMap;

use crate::Platform;

/// Rating and review volume reported by one platform.
///
/// # Examples
/// ```
/// use localpup_core::PlatformRating;
///
/// let rating = PlatformRating::new(9.1, 420);
/// assert_eq!(rating.present_rating(), Some(9.1));
/// assert_eq!(rating.reviews(), 420);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlatformRating {
    /// Rating on the platform's native scale.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub review_count: Option<i64>,
}

impl PlatformRating {
    /// Construct a rating with a known review count.
    #[must_use]
    pub const fn new(rating: f64, review_count: i64) -> Self {
        Self {
            rating: Some(rating),
            review_count: Some(review_count),
        }
    }

    /// Construct a rating without review volume.
    #[must_use]
    pub const fn rating_only(rating: f64) -> Self {
        Self {
            rating: Some(rating),
            review_count: None,
        }
    }

    /// Return the rating when it counts as data: finite and positive.
    #[must_use]
    pub fn present_rating(&self) -> Option<f64> {
        self.rating
            .filter(|value| value.is_finite() && *value > 0.0_f64)
    }

    /// Report whether the platform contributed a usable rating.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present_rating().is_some()
    }

    /// Review count with absent and negative values treated as zero.
    #[must_use]
    pub fn reviews(&self) -> u64 {
        self.review_count
            .and_then(|count| u64::try_from(count).ok())
            .unwrap_or(0)
    }
}

/// Ratings for one listed entity, keyed by platform.
///
/// # Examples
/// ```
/// use localpup_core::{Platform, RatedItem};
///
/// let item = RatedItem::new()
///     .with_rating(Platform::Booking, 9.0, 500)
///     .with_rating(Platform::Ctrip, 4.5, 2000);
/// assert_eq!(item.available_platforms(), 2);
/// assert_eq!(item.total_reviews(), 2500);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RatedItem {
    platforms: BTreeMap<Platform, PlatformRating>,
}

impl RatedItem {
    /// Construct an item with no platform data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for a platform.
    pub fn insert(&mut self, platform: Platform, rating: PlatformRating) {
        self.platforms.insert(platform, rating);
    }

    /// Add a rating and review count while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, platform: Platform, rating: f64, review_count: i64) -> Self {
        self.insert(platform, PlatformRating::new(rating, review_count));
        self
    }

    /// Add an arbitrary platform record while returning `self` for chaining.
    #[must_use]
    pub fn with_record(mut self, platform: Platform, rating: PlatformRating) -> Self {
        self.insert(platform, rating);
        self
    }

    /// Return the raw record for a platform, if any.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&PlatformRating> {
        self.platforms.get(&platform)
    }

    /// Return the usable rating for a platform, if any.
    #[must_use]
    pub fn present_rating(&self, platform: Platform) -> Option<f64> {
        self.get(platform).and_then(PlatformRating::present_rating)
    }

    /// Return the raw review count for a platform, if any.
    #[must_use]
    pub fn review_count(&self, platform: Platform) -> Option<i64> {
        self.get(platform).and_then(|record| record.review_count)
    }

    /// Iterate over recorded platforms in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformRating)> {
        self.platforms.iter().map(|(platform, record)| (*platform, record))
    }

    /// Count platforms with a positive rating.
    #[must_use]
    pub fn available_platforms(&self) -> usize {
        self.platforms
            .values()
            .filter(|record| record.is_present())
            .count()
    }

    /// Sum of every recorded review count, absent and negative counts as zero.
    #[must_use]
    pub fn total_reviews(&self) -> u64 {
        self.platforms
            .values()
            .map(PlatformRating::reviews)
            .fold(0_u64, u64::saturating_add)
    }

    /// Report whether no platform contributed a usable rating.
    #[must_use]
    pub fn is_unrated(&self) -> bool {
        self.available_platforms() == 0
    }
}

impl FromIterator<(Platform, PlatformRating)> for RatedItem {
    fn from_iter<I: IntoIterator<Item = (Platform, PlatformRating)>>(iter: I) -> Self {
        Self {
            platforms: iter.into_iter().collect(),
        }
    }
}
