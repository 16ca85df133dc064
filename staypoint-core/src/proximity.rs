//! Inclusive radius filtering and distance ranking.
//!
//! The filter keeps a candidate when its great-circle distance from the
//! reference point is less than or equal to the radius. Output preserves
//! candidate order; [`rank_by_distance`] is the explicit opt-in for sorting.

use thiserror::Error;

use crate::{Accommodation, GeoPoint, PointOfInterest, haversine_distance};

/// Errors raised by the proximity operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProximityError {
    /// The radius was zero, negative, NaN or infinite.
    #[error("radius must be a positive finite number of metres, got {radius_meters}")]
    InvalidArgument {
        /// Rejected radius.
        radius_meters: f64,
    },
}

/// A validated search radius in metres.
///
/// # Examples
/// ```
/// use staypoint_core::{ProximityError, Radius};
///
/// let radius = Radius::new(1_000.0).expect("positive radius");
/// assert_eq!(radius.meters(), 1_000.0);
/// assert!(matches!(
///     Radius::new(0.0),
///     Err(ProximityError::InvalidArgument { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Radius(f64);

impl Radius {
    /// Validate a radius.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::InvalidArgument`] unless `meters` is finite
    /// and strictly positive. The value is never clamped.
    pub fn new(meters: f64) -> Result<Self, ProximityError> {
        if meters.is_finite() && meters > 0.0 {
            Ok(Self(meters))
        } else {
            Err(ProximityError::InvalidArgument {
                radius_meters: meters,
            })
        }
    }

    /// Radius in metres.
    #[must_use]
    pub const fn meters(self) -> f64 {
        self.0
    }

    /// Whether a distance falls inside the radius, boundary included.
    #[must_use]
    pub fn contains(self, distance_meters: f64) -> bool {
        distance_meters <= self.0
    }
}

impl TryFrom<f64> for Radius {
    type Error = ProximityError;

    fn try_from(meters: f64) -> Result<Self, Self::Error> {
        Self::new(meters)
    }
}

/// A point of interest annotated with its distance from the search centre.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NearbyPoint {
    /// The matched point of interest.
    pub point: PointOfInterest,
    /// Great-circle distance from the reference point in metres.
    pub distance_meters: f64,
}

/// Points of interest found around a selected accommodation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NearbyResult {
    /// The accommodation used as the search centre.
    pub accommodation: Accommodation,
    /// Radius the search used.
    pub radius: Radius,
    /// Matching points in candidate order.
    pub points: Vec<PointOfInterest>,
}

/// Return the candidates within `radius_meters` of `reference`.
///
/// Order follows `candidates`. An empty candidate slice yields an empty
/// result.
///
/// # Errors
///
/// Returns [`ProximityError::InvalidArgument`] for a non-positive or
/// non-finite radius.
///
/// # Examples
/// ```
/// use staypoint_core::{GeoPoint, PointOfInterest, filter_within_radius};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let centre = GeoPoint::new(37.5665, 126.9780)?;
/// let poi = PointOfInterest::new("Deoksugung", GeoPoint::new(37.5700, 126.9820)?)?;
///
/// assert_eq!(filter_within_radius(centre, &[poi.clone()], 1_000.0)?, vec![poi.clone()]);
/// assert!(filter_within_radius(centre, &[poi], 100.0)?.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn filter_within_radius(
    reference: GeoPoint,
    candidates: &[PointOfInterest],
    radius_meters: f64,
) -> Result<Vec<PointOfInterest>, ProximityError> {
    let radius = Radius::new(radius_meters)?;
    Ok(within(reference, candidates, radius).cloned().collect())
}

/// Return the candidates within `radius_meters`, nearest first.
///
/// Members are exactly those of [`filter_within_radius`]. Candidates at equal
/// distance keep their input order.
///
/// # Errors
///
/// Returns [`ProximityError::InvalidArgument`] for a non-positive or
/// non-finite radius.
pub fn rank_by_distance(
    reference: GeoPoint,
    candidates: &[PointOfInterest],
    radius_meters: f64,
) -> Result<Vec<NearbyPoint>, ProximityError> {
    let radius = Radius::new(radius_meters)?;
    let mut ranked: Vec<NearbyPoint> = candidates
        .iter()
        .filter_map(|candidate| {
            let distance_meters = haversine_distance(reference, candidate.location());
            radius.contains(distance_meters).then(|| NearbyPoint {
                point: candidate.clone(),
                distance_meters,
            })
        })
        .collect();
    ranked.sort_by(|lhs, rhs| lhs.distance_meters.total_cmp(&rhs.distance_meters));
    Ok(ranked)
}

/// Find the candidates around an accommodation.
///
/// # Errors
///
/// Returns [`ProximityError::InvalidArgument`] for a non-positive or
/// non-finite radius.
pub fn nearby(
    accommodation: &Accommodation,
    candidates: &[PointOfInterest],
    radius_meters: f64,
) -> Result<NearbyResult, ProximityError> {
    let radius = Radius::new(radius_meters)?;
    let points = within(accommodation.location(), candidates, radius)
        .cloned()
        .collect();
    Ok(NearbyResult {
        accommodation: accommodation.clone(),
        radius,
        points,
    })
}

pub(crate) fn within<'a>(
    reference: GeoPoint,
    candidates: &'a [PointOfInterest],
    radius: Radius,
) -> impl Iterator<Item = &'a PointOfInterest> + 'a {
    candidates.iter().filter(move |candidate| {
        radius.contains(haversine_distance(reference, candidate.location()))
    })
}
