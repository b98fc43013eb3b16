//! Core domain types for the Localpup rating engine.
//!
//! These models describe the per-platform ratings of one listed entity, the
//! static platform profiles used to weigh them, and the composite score
//! consumers render. Profile constructors return `Result` to surface invalid
//! configuration early; everything downstream of a valid profile is total.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod composite;
pub mod platform;
pub mod profile;
pub mod rating;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use composite::{
    ALGORITHM_VERSION, CompositeScore, FINAL_SCORE_MAX, FINAL_SCORE_MIN, PlatformScore,
};
pub use platform::{NativeScale, Platform, PlatformGroup, PlatformParseError};
pub use profile::{PlatformProfile, ProfileError, RatingScale, ScoringProfile};
pub use rating::{PlatformRating, RatedItem};
pub use scorer::{Rated, RatingScorer};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn profile() -> ScoringProfile {
        ScoringProfile::default()
    }

    #[rstest]
    fn every_platform_has_a_default_profile(profile: ScoringProfile) {
        for platform in Platform::ALL {
            assert!(profile.get(platform).is_some(), "missing {platform}");
        }
    }

    #[rstest]
    fn registered_scale_matches_native_scale(profile: ScoringProfile) {
        for (platform, entry) in profile.iter() {
            let five_point = matches!(entry.scale(), RatingScale::FivePoint { .. });
            assert_eq!(
                five_point,
                platform.native_scale() == NativeScale::FivePoint,
                "scale mismatch for {platform}"
            );
        }
    }

    #[rstest]
    fn fixtures_report_expected_metadata() {
        let item = test_support::anchored_example();
        assert_eq!(item.available_platforms(), 2);
        assert_eq!(item.total_reviews(), 2500);
        assert!(test_support::placeholders_only().is_unrated());
        assert_eq!(test_support::fully_rated().available_platforms(), 6);
    }
}
