//! R\*-tree accelerated radius queries.
//!
//! [`ProximityIndex`] answers the same question as
//! [`filter_within_radius`](crate::filter_within_radius) but prunes
//! candidates with a bounding box first. The box is conservative: it always
//! contains the whole search circle, and when it cannot be expressed as a
//! single longitude/latitude rectangle (the circle covers a pole or crosses
//! the antimeridian) the query scans every entry instead. The exact haversine
//! test then decides membership, so results match the linear filter,
//! including order.

use std::f64::consts::FRAC_PI_2;

use rstar::{AABB, RTree, RTreeObject};

use crate::{EARTH_RADIUS_METERS, GeoPoint, PointOfInterest, ProximityError, Radius};

/// Relative padding applied to the angular search radius.
const ANGULAR_SLACK: f64 = 1.0e-9;

/// Absolute padding, in degrees, applied to every envelope edge.
const DEGREE_SLACK: f64 = 1.0e-9;

#[derive(Debug, Clone)]
struct IndexedPoint {
    position: usize,
    point: PointOfInterest,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let location = self.point.location();
        AABB::from_point([location.longitude(), location.latitude()])
    }
}

/// Spatial index over a fixed set of points of interest.
///
/// # Examples
/// ```
/// use staypoint_core::{GeoPoint, PointOfInterest, ProximityIndex};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let index: ProximityIndex = [
///     PointOfInterest::new("Deoksugung", GeoPoint::new(37.5700, 126.9820)?)?,
///     PointOfInterest::new("Lotte World", GeoPoint::new(37.5111, 127.0982)?)?,
/// ]
/// .into_iter()
/// .collect();
///
/// let found = index.within_radius(GeoPoint::new(37.5665, 126.9780)?, 1_000.0)?;
/// assert_eq!(found.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProximityIndex {
    tree: RTree<IndexedPoint>,
}

impl ProximityIndex {
    /// Build an index, remembering each point's position for stable output.
    #[must_use]
    pub fn new(points: Vec<PointOfInterest>) -> Self {
        let entries = points
            .into_iter()
            .enumerate()
            .map(|(position, point)| IndexedPoint { position, point })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of indexed points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Points within `radius_meters` of `reference`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::InvalidArgument`] for a non-positive or
    /// non-finite radius.
    pub fn within_radius(
        &self,
        reference: GeoPoint,
        radius_meters: f64,
    ) -> Result<Vec<PointOfInterest>, ProximityError> {
        let radius = Radius::new(radius_meters)?;
        let inside = |entry: &&IndexedPoint| {
            radius.contains(crate::haversine_distance(reference, entry.point.location()))
        };
        let mut hits: Vec<&IndexedPoint> = match search_envelope(reference, radius) {
            Some(envelope) => self
                .tree
                .locate_in_envelope_intersecting(&envelope)
                .filter(inside)
                .collect(),
            None => self.tree.iter().filter(inside).collect(),
        };
        hits.sort_unstable_by_key(|entry| entry.position);
        Ok(hits.into_iter().map(|entry| entry.point.clone()).collect())
    }
}

impl FromIterator<PointOfInterest> for ProximityIndex {
    fn from_iter<I: IntoIterator<Item = PointOfInterest>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Longitude/latitude rectangle enclosing the search circle, if one exists.
#[expect(
    clippy::float_arithmetic,
    reason = "bounding coordinates are derived with spherical trigonometry"
)]
fn search_envelope(reference: GeoPoint, radius: Radius) -> Option<AABB<[f64; 2]>> {
    let angular = radius.meters() / EARTH_RADIUS_METERS * (1.0 + ANGULAR_SLACK);
    let latitude = reference.latitude().to_radians();
    let min_latitude = latitude - angular;
    let max_latitude = latitude + angular;
    if min_latitude <= -FRAC_PI_2 || max_latitude >= FRAC_PI_2 {
        return None;
    }

    // With both poles outside the circle, cos(latitude) > sin(angular).
    let delta_longitude = (angular.sin() / latitude.cos()).asin().to_degrees();
    let min_longitude = reference.longitude() - delta_longitude - DEGREE_SLACK;
    let max_longitude = reference.longitude() + delta_longitude + DEGREE_SLACK;
    if min_longitude < -180.0 || max_longitude > 180.0 {
        return None;
    }

    Some(AABB::from_corners(
        [min_longitude, min_latitude.to_degrees() - DEGREE_SLACK],
        [max_longitude, max_latitude.to_degrees() + DEGREE_SLACK],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_within_radius;
    use rstest::rstest;

    fn poi(name: &str, lat: f64, lng: f64) -> PointOfInterest {
        PointOfInterest::new(name, GeoPoint::new(lat, lng).expect("valid coordinate"))
            .expect("valid poi")
    }

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).expect("valid coordinate")
    }

    #[rstest]
    fn empty_index_returns_nothing() {
        let index = ProximityIndex::new(Vec::new());
        assert!(index.is_empty());
        let found = index
            .within_radius(point(0.0, 0.0), 1_000.0)
            .expect("valid radius");
        assert!(found.is_empty());
    }

    #[rstest]
    fn rejects_invalid_radius() {
        let index = ProximityIndex::new(vec![poi("a", 0.0, 0.0)]);
        let err = index
            .within_radius(point(0.0, 0.0), -5.0)
            .expect_err("negative radius");
        assert!(matches!(err, ProximityError::InvalidArgument { .. }));
    }

    #[rstest]
    fn preserves_insertion_order() {
        let points = vec![
            poi("east", 37.5665, 126.985),
            poi("west", 37.5665, 126.971),
            poi("centre", 37.5665, 126.978),
        ];
        let index = ProximityIndex::new(points.clone());
        let found = index
            .within_radius(point(37.5665, 126.978), 1_000.0)
            .expect("valid radius");
        assert_eq!(found, points);
    }

    #[rstest]
    #[case::near_north_pole(89.99, 0.0, 5_000.0)]
    #[case::across_antimeridian(0.0, 179.999, 5_000.0)]
    #[case::huge_radius(10.0, 10.0, 20_000_000.0)]
    #[case::ordinary(37.5665, 126.978, 1_500.0)]
    fn matches_linear_filter(#[case] lat: f64, #[case] lng: f64, #[case] radius: f64) {
        let points = vec![
            poi("pole", 90.0, 0.0),
            poi("pole-adjacent", 89.98, 120.0),
            poi("dateline-east", 0.0, -179.999),
            poi("dateline-west", 0.0, 179.99),
            poi("seoul", 37.57, 126.982),
            poi("busan", 35.1796, 129.0756),
            poi("origin", 0.0, 0.0),
        ];
        let reference = point(lat, lng);
        let index = ProximityIndex::new(points.clone());

        let expected = filter_within_radius(reference, &points, radius).expect("valid radius");
        let actual = index.within_radius(reference, radius).expect("valid radius");
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn envelope_is_skipped_when_circle_covers_a_pole() {
        let radius = Radius::new(50_000.0).expect("valid radius");
        assert!(search_envelope(point(89.9, 0.0), radius).is_none());
        assert!(search_envelope(point(37.0, 127.0), radius).is_some());
    }
}
