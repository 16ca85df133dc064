//! Canonical point-of-interest records.

use thiserror::Error;

use crate::GeoPoint;

/// A location worth visiting near an accommodation.
///
/// Names are non-empty but need not be unique: two datasets may describe
/// the same landmark, and both records are kept.
///
/// # Examples
/// ```
/// use staypoint_core::{GeoPoint, PointOfInterest};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let poi = PointOfInterest::new("Cheonggyecheon", GeoPoint::new(37.5690, 126.9784)?)?;
/// assert_eq!(poi.name(), "Cheonggyecheon");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointOfInterest {
    name: String,
    location: GeoPoint,
}

/// Errors returned by [`PointOfInterest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointOfInterestError {
    /// The name was empty or only whitespace.
    #[error("point of interest name must not be blank")]
    EmptyName,
}

impl PointOfInterest {
    /// Construct a `PointOfInterest`, trimming surrounding whitespace from
    /// the name.
    ///
    /// # Errors
    ///
    /// Returns [`PointOfInterestError::EmptyName`] when the trimmed name is
    /// empty.
    pub fn new(name: impl AsRef<str>, location: GeoPoint) -> Result<Self, PointOfInterestError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PointOfInterestError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            location,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }
}
