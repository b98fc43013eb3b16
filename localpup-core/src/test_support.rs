//! Canned rated items shared by unit and behaviour tests.

use crate::{Platform, PlatformRating, RatedItem};

/// Booking 9.0 (500 reviews) alongside Ctrip 4.5 (2000 reviews).
///
/// Scores 8.8 under the default profile once anchoring pulls the inflated
/// domestic contribution back toward the Booking rating.
#[must_use]
pub fn anchored_example() -> RatedItem {
    RatedItem::new()
        .with_rating(Platform::Booking, 9.0, 500)
        .with_rating(Platform::Ctrip, 4.5, 2000)
}

/// Only international ten-point platforms, all close to one another.
#[must_use]
pub fn international_only() -> RatedItem {
    RatedItem::new()
        .with_rating(Platform::Booking, 8.6, 1500)
        .with_rating(Platform::Agoda, 8.4, 800)
        .with_rating(Platform::HotelsCom, 8.8, 120)
}

/// Every platform populated with plausible production values.
#[must_use]
pub fn fully_rated() -> RatedItem {
    RatedItem::new()
        .with_rating(Platform::Booking, 9.1, 2300)
        .with_rating(Platform::Agoda, 8.9, 1100)
        .with_rating(Platform::HotelsCom, 9.0, 640)
        .with_rating(Platform::Airbnb, 4.8, 210)
        .with_rating(Platform::Ctrip, 4.7, 5200)
        .with_rating(Platform::Fliggy, 4.6, 900)
}

/// Records present but carrying no usable rating.
#[must_use]
pub fn placeholders_only() -> RatedItem {
    RatedItem::new()
        .with_rating(Platform::Booking, 0.0, 0)
        .with_record(
            Platform::Ctrip,
            PlatformRating {
                rating: None,
                review_count: Some(35),
            },
        )
}
