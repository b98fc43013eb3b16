//! Named constants of the scoring pipeline, grouped by stage.

/// Review-volume confidence factors and the review counts that unlock them.
pub mod confidence {
    /// Factor for an absent or zero review count.
    pub const NO_REVIEWS: f64 = 0.5;
    /// Factor for 1 to 99 reviews.
    pub const FEW_REVIEWS: f64 = 0.7;
    /// Factor for 100 to 499 reviews.
    pub const SOME_REVIEWS: f64 = 0.8;
    /// Factor for 500 to 999 reviews.
    pub const MANY_REVIEWS: f64 = 0.9;
    /// Factor for 1000 reviews or more.
    pub const SATURATED: f64 = 1.0;

    /// Smallest review count earning [`SOME_REVIEWS`].
    pub const SOME_REVIEWS_FROM: i64 = 100;
    /// Smallest review count earning [`MANY_REVIEWS`].
    pub const MANY_REVIEWS_FROM: i64 = 500;
    /// Smallest review count earning [`SATURATED`].
    pub const SATURATED_FROM: i64 = 1000;
}

/// Five-point to ten-point conversion.
pub mod conversion {
    /// Lowest accepted five-point rating; lower inputs are clamped.
    pub const RATING_MIN: f64 = 1.0;
    /// Highest accepted five-point rating; higher inputs are clamped.
    pub const RATING_MAX: f64 = 5.0;

    /// Width of each input band on the five-point scale.
    pub const SEGMENT_WIDTH: f64 = 0.5;
    /// Width of each output band on the ten-point scale.
    pub const SEGMENT_SPAN: f64 = 1.0;
    /// `(input floor, output low)` pairs, highest band first.
    pub const SEGMENTS: [(f64, f64); 4] = [(4.5, 9.0), (4.0, 8.0), (3.5, 7.0), (3.0, 6.0)];
    /// Band used for inputs below every floor; its formula extrapolates.
    pub const LOWEST_SEGMENT: (f64, f64) = (3.0, 6.0);

    /// Multiplier turning the confidence factor into an additive bonus.
    pub const CONFIDENCE_BONUS: f64 = 0.15;

    /// Lowest converted score.
    pub const SCORE_MIN: f64 = 6.0;
    /// Highest converted score.
    pub const SCORE_MAX: f64 = 10.0;
}

/// Group aggregation and combination.
pub mod aggregation {
    /// Fixed divisor of the domestic total, independent of how many domestic
    /// platforms reported.
    pub const DOMESTIC_DIVISOR: f64 = 2.0;
    /// First term of the domestic rescale `(average / 4) * 2.5 * 10`.
    pub const DOMESTIC_RESCALE_DIVISOR: f64 = 4.0;
    /// Second term of the domestic rescale.
    pub const DOMESTIC_RESCALE_FACTOR: f64 = 2.5;
    /// Third term of the domestic rescale.
    pub const DOMESTIC_RESCALE_MULTIPLIER: f64 = 10.0;

    /// Share of the domestic group when both groups reported.
    pub const DOMESTIC_SHARE: f64 = 0.4;
    /// Share of the international group when both groups reported.
    pub const INTERNATIONAL_SHARE: f64 = 0.6;

    /// Composite used when no platform reported a rating.
    pub const NO_DATA_SCORE: f64 = 8.5;
}

/// Anchoring of the combined score toward a reference platform.
pub mod anchor {
    use localpup_core::Platform;

    /// Platform whose rating anchors the composite.
    pub const ANCHOR_PLATFORM: Platform = Platform::Booking;
    /// Anchor used when the anchor platform has no rating.
    pub const DEFAULT_ANCHOR: f64 = 8.8;
    /// Largest divergence from the anchor left untouched.
    pub const TOLERANCE: f64 = 0.3;
    /// Distance from the anchor after an adjustment.
    pub const STEP: f64 = 0.2;
    /// Slack absorbing binary rounding in the tolerance comparison.
    pub const COMPARISON_EPSILON: f64 = 1e-9;
}
