//! Validated WGS84 coordinates.

use geo::{Coord, Point};
use thiserror::Error;

/// Inclusive latitude bounds in degrees.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Inclusive longitude bounds in degrees.
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// An immutable latitude/longitude pair.
///
/// Both components are finite and within their geographic range. The only
/// way to obtain a `GeoPoint` is through [`GeoPoint::new`], so holders never
/// need to re-validate.
///
/// # Examples
///
/// ```
/// use staypoint_core::GeoPoint;
///
/// # fn main() -> Result<(), staypoint_core::GeoPointError> {
/// let point = GeoPoint::new(37.5665, 126.9780)?;
/// assert_eq!(point.latitude(), 37.5665);
/// assert_eq!(point.coord().x, 126.9780);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGeoPoint")
)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoPointError {
    /// Latitude was NaN, infinite or outside `[-90, 90]`.
    #[error("latitude {value} is not a finite value in [-90, 90]")]
    InvalidLatitude {
        /// Rejected latitude.
        value: f64,
    },
    /// Longitude was NaN, infinite or outside `[-180, 180]`.
    #[error("longitude {value} is not a finite value in [-180, 180]")]
    InvalidLongitude {
        /// Rejected longitude.
        value: f64,
    },
}

impl GeoPoint {
    /// Validate and construct a [`GeoPoint`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoPointError`] when either component is non-finite or out of
    /// range. Latitude is checked first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !LATITUDE_RANGE.contains(&latitude) {
            return Err(GeoPointError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !LONGITUDE_RANGE.contains(&longitude) {
            return Err(GeoPointError::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The point as a `geo` coordinate with `x = longitude`, `y = latitude`.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        point.coord()
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Self(point.coord())
    }
}

impl TryFrom<Coord<f64>> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

/// Unvalidated wire form used while deserialising.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}
