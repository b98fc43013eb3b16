//! Facade crate for the Localpup rating engine.
//!
//! This crate re-exports the core rating types and the composite scorer so
//! callers can depend on a single package.

#![forbid(unsafe_code)]

pub use localpup_core::{
    ALGORITHM_VERSION, CompositeScore, FINAL_SCORE_MAX, FINAL_SCORE_MIN, NativeScale, Platform,
    PlatformGroup, PlatformParseError, PlatformProfile, PlatformRating, PlatformScore,
    ProfileError, Rated, RatedItem, RatingScale, RatingScorer, ScoringProfile,
};

pub use localpup_scorer::{
    CompositeScorer, Ranked, RatingSummary, ScoreRange, calculate_weighted_score, confidence,
    convert_5_to_10, rank, rating_stats, summarise, top_rated,
};

#[cfg(feature = "test-support")]
pub use localpup_core::test_support;
