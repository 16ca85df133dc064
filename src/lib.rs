//! Facade crate for the Staypoint proximity engine.
//!
//! This crate re-exports the core domain types and exposes the dataset
//! normalizer and listing adapters behind the `data` feature flag.

#![forbid(unsafe_code)]

pub use staypoint_core::{
    Accommodation, AccommodationError, AccommodationListing, AccommodationProvider,
    EARTH_RADIUS_METERS, GeoPoint, GeoPointError, ListingError, ListingQuery, NearbyPoint,
    NearbyResult, PointOfInterest, PointOfInterestError, PriceEstimator, ProximityError,
    ProximityIndex, Radius, RatingEstimator, filter_within_radius, haversine_distance, merge,
    nearby, rank_by_distance,
};

#[cfg(feature = "data")]
pub use staypoint_data::{
    CachedAccommodationProvider, DEFAULT_WRAPPER_KEY, DatasetError, DatasetLoad, FixedEstimator,
    HttpAccommodationProvider, NormalizeReport, SchemaKind, SeededEstimator, load_dataset,
    load_datasets, normalize, normalize_report,
};
