//! Five-point to ten-point scale conversion.
//!
//! Five-point ratings are not simply doubled. The clamped rating is mapped
//! through four linear bands (each 0.5 wide on input, 1.0 wide on output),
//! then shifted by the platform's additive adjustment and a review-volume
//! bonus, clamped to `6.0..=10.0`, and rounded to one decimal place.

use localpup_core::{Platform, PlatformRating, RatingScale, ScoringProfile};

use crate::confidence::confidence;
use crate::constants::conversion::{
    CONFIDENCE_BONUS, LOWEST_SEGMENT, RATING_MAX, RATING_MIN, SCORE_MAX, SCORE_MIN,
    SEGMENT_SPAN, SEGMENT_WIDTH, SEGMENTS,
};

/// Convert a five-point rating using the default platform profile.
///
/// `platform` is expected to be a five-point platform (Airbnb, Ctrip, or
/// Fliggy). Ten-point platforms fall outside that contract: they have no
/// adjustment, so their rating is run through the five-point bands with a
/// zero platform bonus rather than returned unchanged. The per-platform
/// breakdown of [`crate::rating_stats`] keeps ten-point ratings native.
///
/// # Examples
/// ```
/// use localpup_core::Platform;
/// use localpup_scorer::convert_5_to_10;
///
/// assert_eq!(convert_5_to_10(4.5, Platform::Ctrip, Some(2000)), 9.4);
/// assert_eq!(convert_5_to_10(1.0, Platform::Airbnb, None), 6.0);
/// ```
#[must_use]
pub fn convert_5_to_10(rating5: f64, platform: Platform, review_count: Option<i64>) -> f64 {
    crate::default_scorer().convert_5_to_10(rating5, platform, review_count)
}

/// Convert with an explicit additive adjustment.
#[expect(
    clippy::float_arithmetic,
    reason = "the conversion adds a platform bonus and a confidence bonus"
)]
pub(crate) fn convert_with_adjustment(
    rating5: f64,
    adjustment: f64,
    review_count: Option<i64>,
) -> f64 {
    let clamped = clamp_rating(rating5);
    let raw = piecewise_base(clamped) + adjustment + confidence(review_count) * CONFIDENCE_BONUS;
    round_to_tenth(raw.clamp(SCORE_MIN, SCORE_MAX))
}

/// Normalise a present rating to ten points according to `scale`.
pub(crate) fn normalise(rating: f64, scale: RatingScale, review_count: Option<i64>) -> f64 {
    match scale {
        RatingScale::TenPoint => rating,
        RatingScale::FivePoint { adjustment } => {
            convert_with_adjustment(rating, adjustment, review_count)
        }
    }
}

/// Normalise a platform record, falling back to the platform's native scale
/// when `profile` does not register it.
pub(crate) fn normalise_record(
    profile: &ScoringProfile,
    platform: Platform,
    record: &PlatformRating,
) -> Option<f64> {
    let rating = record.present_rating()?;
    let scale = profile.get(platform).map_or_else(
        || match platform.native_scale() {
            localpup_core::NativeScale::TenPoint => RatingScale::TenPoint,
            localpup_core::NativeScale::FivePoint => RatingScale::FivePoint {
                adjustment: 0.0_f64,
            },
        },
        |entry| entry.scale(),
    );
    Some(normalise(rating, scale, record.review_count))
}

/// Round half away from zero to one decimal place.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to tenths scales, rounds, and rescales"
)]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0_f64).round() / 10.0_f64
}

fn clamp_rating(rating5: f64) -> f64 {
    if rating5.is_nan() {
        log::trace!("non-numeric five-point rating treated as {RATING_MIN}");
        return RATING_MIN;
    }
    if !(RATING_MIN..=RATING_MAX).contains(&rating5) {
        log::trace!("five-point rating {rating5} clamped into {RATING_MIN}..={RATING_MAX}");
    }
    rating5.clamp(RATING_MIN, RATING_MAX)
}

#[expect(
    clippy::float_arithmetic,
    reason = "each band is a linear interpolation"
)]
fn piecewise_base(clamped: f64) -> f64 {
    let (floor, low) = SEGMENTS
        .into_iter()
        .find(|(floor, _)| clamped >= *floor)
        .unwrap_or(LOWEST_SEGMENT);
    low + ((clamped - floor) / SEGMENT_WIDTH) * SEGMENT_SPAN
}
