//! Pluggable display attributes for accommodations.
//!
//! The listing source publishes neither prices nor ratings. Providers ask an
//! estimator for them instead, so tests and reproducible runs can inject
//! fixed or seeded values.

use crate::GeoPoint;

/// Supply a nightly price, in won, for an accommodation.
pub trait PriceEstimator: Send + Sync {
    /// Estimate the price for the named accommodation at `location`.
    fn estimate_price(&self, name: &str, location: GeoPoint) -> u32;
}

/// Supply a rating in `[1.0, 5.0]` for an accommodation.
pub trait RatingEstimator: Send + Sync {
    /// Estimate the rating for the named accommodation at `location`.
    ///
    /// Values outside `[1.0, 5.0]` make the provider drop the record.
    fn estimate_rating(&self, name: &str, location: GeoPoint) -> f32;
}
