//! Price and rating estimators for listings that publish neither.
//!
//! The accommodation listing carries names and coordinates only. These
//! estimators fill in a nightly price and a rating so results can be compared.

use std::ops::Range;
use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use staypoint_core::{GeoPoint, PriceEstimator, RatingEstimator};

/// Nightly price range in won, upper bound exclusive.
pub const PRICE_RANGE: Range<u32> = 150_000..300_000;

/// Lowest rating the seeded estimator draws.
const MIN_RATING: f32 = 3.0;

/// Highest rating the seeded estimator draws.
const MAX_RATING: f32 = 5.0;

/// Reproducible random estimates from a ChaCha8 stream.
///
/// Prices and ratings are drawn from one shared stream, so the sequence of
/// calls determines the values: the same seed and call order always yield
/// the same estimates.
///
/// # Examples
/// ```
/// use staypoint_core::{GeoPoint, PriceEstimator, RatingEstimator};
/// use staypoint_data::SeededEstimator;
///
/// # fn main() -> Result<(), staypoint_core::GeoPointError> {
/// let estimator = SeededEstimator::new(7);
/// let here = GeoPoint::new(37.5665, 126.9780)?;
/// let price = estimator.estimate_price("Hotel", here);
/// let rating = estimator.estimate_rating("Hotel", here);
/// assert!((150_000..300_000).contains(&price));
/// assert!((3.0..=5.0).contains(&rating));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SeededEstimator {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededEstimator {
    /// Create an estimator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn draw<T>(&self, sample: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample(&mut rng)
    }
}

impl PriceEstimator for SeededEstimator {
    fn estimate_price(&self, _name: &str, _location: GeoPoint) -> u32 {
        self.draw(|rng| rng.gen_range(PRICE_RANGE))
    }
}

impl RatingEstimator for SeededEstimator {
    fn estimate_rating(&self, _name: &str, _location: GeoPoint) -> f32 {
        let raw = self.draw(|rng| rng.gen_range(MIN_RATING..=MAX_RATING));
        round_to_tenth(raw)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "ratings are displayed to one decimal place"
)]
fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Constant estimates for tests and reproducible reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEstimator {
    price: u32,
    rating: f32,
}

impl FixedEstimator {
    /// Always estimate `price` and `rating`.
    #[must_use]
    pub const fn new(price: u32, rating: f32) -> Self {
        Self { price, rating }
    }
}

impl PriceEstimator for FixedEstimator {
    fn estimate_price(&self, _name: &str, _location: GeoPoint) -> u32 {
        self.price
    }
}

impl RatingEstimator for FixedEstimator {
    fn estimate_rating(&self, _name: &str, _location: GeoPoint) -> f32 {
        self.rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn here() -> GeoPoint {
        GeoPoint::new(37.5665, 126.978).expect("valid coordinate")
    }

    fn draws(estimator: &SeededEstimator, here: GeoPoint) -> Vec<(u32, f32)> {
        (0..20)
            .map(|_| {
                (
                    estimator.estimate_price("x", here),
                    estimator.estimate_rating("x", here),
                )
            })
            .collect()
    }

    #[rstest]
    fn same_seed_gives_same_sequence(here: GeoPoint) {
        let first = draws(&SeededEstimator::new(42), here);
        let second = draws(&SeededEstimator::new(42), here);
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_diverge(here: GeoPoint) {
        assert_ne!(
            draws(&SeededEstimator::new(1), here),
            draws(&SeededEstimator::new(2), here)
        );
    }

    #[rstest]
    fn draws_stay_in_range(here: GeoPoint) {
        let estimator = SeededEstimator::new(9);
        for (price, rating) in draws(&estimator, here) {
            assert!(PRICE_RANGE.contains(&price), "price {price} out of range");
            assert!((MIN_RATING..=MAX_RATING).contains(&rating), "rating {rating}");
            let tenths = rating * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-4, "rating {rating} not rounded");
        }
    }

    #[rstest]
    fn fixed_estimator_is_constant(here: GeoPoint) {
        let estimator = FixedEstimator::new(199_000, 4.5);
        assert_eq!(estimator.estimate_price("a", here), 199_000);
        assert_eq!(estimator.estimate_rating("b", here), 4.5);
    }
}
