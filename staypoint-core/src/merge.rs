//! Concatenation of normalized datasets.

use crate::PointOfInterest;

/// Concatenate normalized point sets in the order given.
///
/// Nothing is deduplicated: the same landmark published by two datasets
/// appears twice.
///
/// # Examples
/// ```
/// use staypoint_core::{GeoPoint, PointOfInterest, merge};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gate = PointOfInterest::new("Gwanghwamun", GeoPoint::new(37.5760, 126.9769)?)?;
/// let merged = merge([vec![gate.clone()], Vec::new(), vec![gate.clone()]]);
/// assert_eq!(merged, vec![gate.clone(), gate]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn merge<I>(sources: I) -> Vec<PointOfInterest>
where
    I: IntoIterator<Item = Vec<PointOfInterest>>,
{
    sources.into_iter().flatten().collect()
}
