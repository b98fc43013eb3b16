//! Platform profiles: per-platform authority weights and scale metadata.
//!
//! A [`ScoringProfile`] is an immutable registry injected into scorers, so
//! alternate weight tables can be substituted without touching global state.
//! [`ScoringProfile::default`] carries the production table.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{Platform, PlatformGroup};

/// Authority weight of Booking.com.
pub const BOOKING_WEIGHT: f64 = 1.2;
/// Authority weight of Agoda.
pub const AGODA_WEIGHT: f64 = 1.0;
/// Authority weight of Hotels.com.
pub const HOTELSCOM_WEIGHT: f64 = 0.95;
/// Authority weight of Airbnb.
pub const AIRBNB_WEIGHT: f64 = 0.85;
/// Authority weight of Ctrip.
pub const CTRIP_WEIGHT: f64 = 1.1;
/// Authority weight of Fliggy.
pub const FLIGGY_WEIGHT: f64 = 1.0;

/// Additive bonus applied when converting Airbnb ratings.
pub const AIRBNB_ADJUSTMENT: f64 = 0.0;
/// Additive bonus applied when converting Ctrip ratings.
///
/// Ctrip ratings run numerically more conservative than the international
/// platforms, so they receive the largest bonus.
pub const CTRIP_ADJUSTMENT: f64 = 0.2;
/// Additive bonus applied when converting Fliggy ratings.
pub const FLIGGY_ADJUSTMENT: f64 = 0.1;

/// Scale a platform's ratings are published on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum RatingScale {
    /// Native ten-point ratings, used as-is.
    TenPoint,
    /// Five-point ratings converted to ten points.
    FivePoint {
        /// Additive adjustment applied during conversion.
        adjustment: f64,
    },
}

impl RatingScale {
    /// Additive conversion adjustment; zero for ten-point platforms.
    #[must_use]
    pub const fn adjustment(self) -> f64 {
        match self {
            Self::TenPoint => 0.0_f64,
            Self::FivePoint { adjustment } => adjustment,
        }
    }
}

/// Errors raised when building platform profiles.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// A weight was zero, negative, or not finite.
    #[error("weight for {platform} must be finite and positive, got {weight}")]
    InvalidWeight {
        /// Platform whose weight was rejected.
        platform: Platform,
        /// Rejected value.
        weight: f64,
    },
    /// A conversion adjustment was not finite.
    #[error("conversion adjustment for {platform} must be finite, got {adjustment}")]
    InvalidAdjustment {
        /// Platform whose adjustment was rejected.
        platform: Platform,
        /// Rejected value.
        adjustment: f64,
    },
    /// The registry contained no platforms.
    #[error("scoring profile must contain at least one platform")]
    Empty,
}

/// Static configuration for one platform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlatformProfile {
    weight: f64,
    scale: RatingScale,
    group: PlatformGroup,
}

impl PlatformProfile {
    /// Validate and construct a profile for `platform`.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidWeight`] when `weight` is not a finite
    /// positive number, and [`ProfileError::InvalidAdjustment`] when a
    /// five-point adjustment is not finite.
    pub fn new(
        platform: Platform,
        weight: f64,
        scale: RatingScale,
        group: PlatformGroup,
    ) -> Result<Self, ProfileError> {
        if !weight.is_finite() || weight <= 0.0_f64 {
            return Err(ProfileError::InvalidWeight { platform, weight });
        }
        let adjustment = scale.adjustment();
        if !adjustment.is_finite() {
            return Err(ProfileError::InvalidAdjustment {
                platform,
                adjustment,
            });
        }
        Ok(Self {
            weight,
            scale,
            group,
        })
    }

    const fn fixed(weight: f64, scale: RatingScale, group: PlatformGroup) -> Self {
        Self {
            weight,
            scale,
            group,
        }
    }

    /// Relative authority of the platform.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Rating scale metadata.
    #[must_use]
    pub const fn scale(&self) -> RatingScale {
        self.scale
    }

    /// Aggregation group the platform contributes to.
    #[must_use]
    pub const fn group(&self) -> PlatformGroup {
        self.group
    }

    fn validate(&self, platform: Platform) -> Result<(), ProfileError> {
        Self::new(platform, self.weight, self.scale, self.group).map(|_| ())
    }
}

/// Immutable registry of platform profiles.
///
/// # Examples
/// ```
/// use localpup_core::{Platform, ScoringProfile};
///
/// let profile = ScoringProfile::default();
/// assert_eq!(profile.weight(Platform::Booking), Some(1.2));
/// assert_eq!(profile.adjustment(Platform::Ctrip), 0.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<Platform, PlatformProfile>",
        into = "BTreeMap<Platform, PlatformProfile>"
    )
)]
pub struct ScoringProfile {
    profiles: BTreeMap<Platform, PlatformProfile>,
}

impl ScoringProfile {
    /// Validate and construct a registry.
    ///
    /// # Errors
    /// Returns [`ProfileError::Empty`] for an empty map, or the first
    /// per-platform validation failure.
    pub fn new(profiles: BTreeMap<Platform, PlatformProfile>) -> Result<Self, ProfileError> {
        if profiles.is_empty() {
            return Err(ProfileError::Empty);
        }
        for (platform, profile) in &profiles {
            profile.validate(*platform)?;
        }
        Ok(Self { profiles })
    }

    /// Replace one platform's profile while returning `self` for chaining.
    #[must_use]
    pub fn with_profile(mut self, platform: Platform, profile: PlatformProfile) -> Self {
        self.profiles.insert(platform, profile);
        self
    }

    /// Return a copy without `platform`, so its data is ignored when scoring.
    ///
    /// # Errors
    /// Returns [`ProfileError::Empty`] when `platform` was the last entry.
    pub fn without(mut self, platform: Platform) -> Result<Self, ProfileError> {
        self.profiles.remove(&platform);
        Self::new(self.profiles)
    }

    /// Return the profile for a platform, if registered.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&PlatformProfile> {
        self.profiles.get(&platform)
    }

    /// Return the authority weight for a platform, if registered.
    #[must_use]
    pub fn weight(&self, platform: Platform) -> Option<f64> {
        self.get(platform).map(PlatformProfile::weight)
    }

    /// Conversion adjustment for a platform; zero when unregistered or ten-point.
    #[must_use]
    pub fn adjustment(&self, platform: Platform) -> f64 {
        self.get(platform)
            .map_or(0.0_f64, |profile| profile.scale().adjustment())
    }

    /// Iterate over registered platforms in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformProfile)> {
        self.profiles
            .iter()
            .map(|(platform, profile)| (*platform, profile))
    }

    /// Iterate over the platforms registered in `group`.
    pub fn group(&self, group: PlatformGroup) -> impl Iterator<Item = (Platform, &PlatformProfile)> {
        self.iter().filter(move |(_, profile)| profile.group() == group)
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        use PlatformGroup::{Domestic, International};
        let profiles = BTreeMap::from([
            (
                Platform::Booking,
                PlatformProfile::fixed(BOOKING_WEIGHT, RatingScale::TenPoint, International),
            ),
            (
                Platform::Agoda,
                PlatformProfile::fixed(AGODA_WEIGHT, RatingScale::TenPoint, International),
            ),
            (
                Platform::HotelsCom,
                PlatformProfile::fixed(HOTELSCOM_WEIGHT, RatingScale::TenPoint, International),
            ),
            (
                Platform::Airbnb,
                PlatformProfile::fixed(
                    AIRBNB_WEIGHT,
                    RatingScale::FivePoint {
                        adjustment: AIRBNB_ADJUSTMENT,
                    },
                    International,
                ),
            ),
            (
                Platform::Ctrip,
                PlatformProfile::fixed(
                    CTRIP_WEIGHT,
                    RatingScale::FivePoint {
                        adjustment: CTRIP_ADJUSTMENT,
                    },
                    Domestic,
                ),
            ),
            (
                Platform::Fliggy,
                PlatformProfile::fixed(
                    FLIGGY_WEIGHT,
                    RatingScale::FivePoint {
                        adjustment: FLIGGY_ADJUSTMENT,
                    },
                    Domestic,
                ),
            ),
        ]);
        Self { profiles }
    }
}

impl TryFrom<BTreeMap<Platform, PlatformProfile>> for ScoringProfile {
    type Error = ProfileError;

    fn try_from(profiles: BTreeMap<Platform, PlatformProfile>) -> Result<Self, Self::Error> {
        Self::new(profiles)
    }
}

impl From<ScoringProfile> for BTreeMap<Platform, PlatformProfile> {
    fn from(profile: ScoringProfile) -> Self {
        profile.profiles
    }
}
