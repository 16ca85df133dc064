//! Accommodation records and the listing they are selected from.
//!
//! Accommodations are produced by an
//! [`AccommodationProvider`](crate::AccommodationProvider). The proximity
//! engine only reads their location; price and rating are carried through
//! for display.

use std::collections::HashSet;

use thiserror::Error;

use crate::GeoPoint;

/// Inclusive rating bounds.
const RATING_RANGE: std::ops::RangeInclusive<f32> = 1.0..=5.0;

/// A place to stay.
///
/// # Examples
/// ```
/// use staypoint_core::{Accommodation, GeoPoint};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hotel = Accommodation::new("Hotel Seoul", GeoPoint::new(37.56, 126.97)?, 180_000, 4.2)?;
/// assert_eq!(hotel.price(), 180_000);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Accommodation {
    name: String,
    location: GeoPoint,
    price: u32,
    rating: f32,
}

/// Errors returned by [`Accommodation::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccommodationError {
    /// The name was empty or only whitespace.
    #[error("accommodation name must not be blank")]
    EmptyName,
    /// The rating was non-finite or outside `[1.0, 5.0]`.
    #[error("rating {value} is outside the range 1.0 to 5.0")]
    InvalidRating {
        /// Rejected rating.
        value: f32,
    },
}

impl Accommodation {
    /// Validate and construct an [`Accommodation`].
    ///
    /// # Errors
    ///
    /// Returns [`AccommodationError`] for a blank name or an out-of-range
    /// rating.
    pub fn new(
        name: impl AsRef<str>,
        location: GeoPoint,
        price: u32,
        rating: f32,
    ) -> Result<Self, AccommodationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccommodationError::EmptyName);
        }
        if !rating.is_finite() || !RATING_RANGE.contains(&rating) {
            return Err(AccommodationError::InvalidRating { value: rating });
        }
        Ok(Self {
            name: trimmed.to_owned(),
            location,
            price,
            rating,
        })
    }

    /// Display name, unique within an [`AccommodationListing`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position used as the search centre.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    /// Nightly price in won.
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.price
    }

    /// Rating between 1.0 and 5.0.
    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }
}

/// Ordered accommodations keyed by unique name.
///
/// Building a listing keeps the first accommodation seen for each name, so
/// [`AccommodationListing::find`] is unambiguous.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct AccommodationListing {
    entries: Vec<Accommodation>,
}

impl AccommodationListing {
    /// Number of accommodations in the listing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing holds no accommodations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an accommodation by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Accommodation> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Iterate over accommodations in listing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Accommodation> {
        self.entries.iter()
    }

    /// Names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Accommodation::name)
    }

    /// Consume the listing, returning its accommodations.
    #[must_use]
    pub fn into_inner(self) -> Vec<Accommodation> {
        self.entries
    }
}

impl FromIterator<Accommodation> for AccommodationListing {
    fn from_iter<I: IntoIterator<Item = Accommodation>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let entries = iter
            .into_iter()
            .filter(|entry| seen.insert(entry.name.clone()))
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a AccommodationListing {
    type Item = &'a Accommodation;
    type IntoIter = std::slice::Iter<'a, Accommodation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn seoul() -> GeoPoint {
        GeoPoint::new(37.5665, 126.978).expect("valid coordinate")
    }

    #[rstest]
    #[case(1.0)]
    #[case(5.0)]
    #[case(3.7)]
    fn accepts_ratings_in_range(seoul: GeoPoint, #[case] rating: f32) {
        assert!(Accommodation::new("Inn", seoul, 100, rating).is_ok());
    }

    #[rstest]
    #[case(0.9)]
    #[case(5.1)]
    #[case(f32::NAN)]
    fn rejects_ratings_out_of_range(seoul: GeoPoint, #[case] rating: f32) {
        let err = Accommodation::new("Inn", seoul, 100, rating).expect_err("bad rating");
        assert!(matches!(err, AccommodationError::InvalidRating { .. }));
    }

    #[rstest]
    fn rejects_blank_name(seoul: GeoPoint) {
        let err = Accommodation::new(" ", seoul, 100, 4.0).expect_err("blank name");
        assert_eq!(err, AccommodationError::EmptyName);
    }

    #[rstest]
    fn listing_keeps_first_accommodation_per_name(seoul: GeoPoint) {
        let first = Accommodation::new("Inn", seoul, 100, 4.0).expect("valid");
        let duplicate = Accommodation::new("Inn", seoul, 200, 3.0).expect("valid");
        let other = Accommodation::new("Lodge", seoul, 300, 5.0).expect("valid");

        let listing: AccommodationListing = [first.clone(), duplicate, other.clone()]
            .into_iter()
            .collect();

        assert_eq!(listing.len(), 2);
        assert_eq!(listing.find("Inn"), Some(&first));
        assert_eq!(listing.find("Lodge"), Some(&other));
        assert_eq!(listing.find("Motel"), None);
        assert_eq!(listing.names().collect::<Vec<_>>(), vec!["Inn", "Lodge"]);
    }
}
