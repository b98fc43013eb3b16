//! Rating platforms and their static classification.
//!
//! The enum offers compile-time safety for platform lookups. Declaration order
//! is the registry order used whenever platforms are iterated.
//!
//! # Examples
//! ```
//! use localpup_core::Platform;
//!
//! assert_eq!(Platform::HotelsCom.as_str(), "hotelscom");
//! assert_eq!(Platform::Ctrip.to_string(), "ctrip");
//! ```

use thiserror::Error;

/// An external rating source with its own scale and review population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// Booking.com, ten-point scale.
    Booking,
    /// Agoda, ten-point scale.
    Agoda,
    /// Hotels.com, ten-point scale.
    HotelsCom,
    /// Airbnb, five-point scale.
    Airbnb,
    /// Ctrip (Trip.com China), five-point scale.
    Ctrip,
    /// Fliggy, five-point scale.
    Fliggy,
}

impl Platform {
    /// Every known platform in registry order.
    pub const ALL: [Self; 6] = [
        Self::Booking,
        Self::Agoda,
        Self::HotelsCom,
        Self::Airbnb,
        Self::Ctrip,
        Self::Fliggy,
    ];

    /// Return the platform identifier as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use localpup_core::Platform;
    ///
    /// assert_eq!(Platform::Fliggy.as_str(), "fliggy");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Agoda => "agoda",
            Self::HotelsCom => "hotelscom",
            Self::Airbnb => "airbnb",
            Self::Ctrip => "ctrip",
            Self::Fliggy => "fliggy",
        }
    }

    /// Scale the platform publishes its ratings on.
    #[must_use]
    pub const fn native_scale(self) -> NativeScale {
        match self {
            Self::Booking | Self::Agoda | Self::HotelsCom => NativeScale::TenPoint,
            Self::Airbnb | Self::Ctrip | Self::Fliggy => NativeScale::FivePoint,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown platform identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown platform '{0}'")]
pub struct PlatformParseError(pub String);

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "booking" => Ok(Self::Booking),
            "agoda" => Ok(Self::Agoda),
            "hotelscom" | "hotels.com" => Ok(Self::HotelsCom),
            "airbnb" => Ok(Self::Airbnb),
            "ctrip" => Ok(Self::Ctrip),
            "fliggy" => Ok(Self::Fliggy),
            _ => Err(PlatformParseError(s.to_owned())),
        }
    }
}

/// Native rating scale of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeScale {
    /// Ratings in `1.0..=5.0`.
    FivePoint,
    /// Ratings in `0.0..=10.0`.
    TenPoint,
}

/// Aggregation group a platform contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlatformGroup {
    /// Mainland platforms rated on five points.
    Domestic,
    /// Platforms rated on ten points, plus converted five-point entrants.
    International,
}
