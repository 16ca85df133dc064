//! Core domain types for the Staypoint engine.
//!
//! The crate holds the pure geospatial logic: validated coordinates, the
//! canonical point-of-interest and accommodation records, great-circle
//! distance, the inclusive radius filter and the traits through which
//! accommodation listings and synthetic display attributes are supplied.
//!
//! Everything here is synchronous and free of I/O. Adapters that talk to
//! files or remote services live in `staypoint-data`.
//!
//! # Examples
//!
//! ```
//! use staypoint_core::{GeoPoint, PointOfInterest, filter_within_radius};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let city_hall = GeoPoint::new(37.5665, 126.9780)?;
//! let nearby = PointOfInterest::new("Deoksugung", GeoPoint::new(37.5700, 126.9820)?)?;
//! let far = PointOfInterest::new("Lotte World", GeoPoint::new(37.5111, 127.0982)?)?;
//!
//! let found = filter_within_radius(city_hall, &[nearby.clone(), far], 1_000.0)?;
//! assert_eq!(found, vec![nearby]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod accommodation;
pub mod distance;
pub mod estimate;
pub mod geo_point;
pub mod index;
pub mod listing;
pub mod merge;
pub mod poi;
pub mod proximity;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use accommodation::{Accommodation, AccommodationError, AccommodationListing};
pub use distance::{EARTH_RADIUS_METERS, haversine_distance};
pub use estimate::{PriceEstimator, RatingEstimator};
pub use geo_point::{GeoPoint, GeoPointError};
pub use index::ProximityIndex;
pub use listing::{AccommodationProvider, ListingError, ListingQuery};
pub use merge::merge;
pub use poi::{PointOfInterest, PointOfInterestError};
pub use proximity::{
    NearbyPoint, NearbyResult, ProximityError, Radius, filter_within_radius, nearby,
    rank_by_distance,
};
