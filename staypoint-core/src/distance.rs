//! Great-circle distance on a spherical Earth.

use crate::GeoPoint;

/// Mean Earth radius in metres used by [`haversine_distance`].
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in metres between two points.
///
/// Uses the haversine formula
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)`,
/// `d = 2·R·asin(√a)`. The result is symmetric in its arguments and zero for
/// identical points.
///
/// # Examples
/// ```
/// use staypoint_core::{GeoPoint, haversine_distance};
///
/// # fn main() -> Result<(), staypoint_core::GeoPointError> {
/// let city_hall = GeoPoint::new(37.5665, 126.9780)?;
/// let nearby = GeoPoint::new(37.5700, 126.9820)?;
/// let metres = haversine_distance(city_hall, nearby);
/// assert!((450.0..550.0).contains(&metres));
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lng = (to.longitude() - from.longitude()).to_radians();

    let half_lat = (delta_lat / 2.0).sin();
    let half_lng = (delta_lng / 2.0).sin();
    let a = half_lat.mul_add(half_lat, lat1.cos() * lat2.cos() * half_lng * half_lng);

    // Rounding can push `a` a hair outside [0, 1] for antipodal points.
    2.0 * EARTH_RADIUS_METERS * a.clamp(0.0, 1.0).sqrt().asin()
}
