//! Accommodation provider trait.

use crate::Accommodation;

use super::{ListingError, ListingQuery};

/// Supply the accommodations matching a listing query.
///
/// Implementations are synchronous so the engine stays embeddable outside
/// an async runtime. Every returned accommodation already satisfies the
/// [`Accommodation`] invariants; records without usable coordinates are
/// dropped by the implementation rather than reported as errors.
///
/// # Examples
///
/// ```rust
/// use staypoint_core::{
///     Accommodation, AccommodationProvider, GeoPoint, ListingError, ListingQuery,
/// };
///
/// struct OneHotel;
///
/// impl AccommodationProvider for OneHotel {
///     fn fetch_accommodations(
///         &self,
///         _query: &ListingQuery,
///     ) -> Result<Vec<Accommodation>, ListingError> {
///         let location = GeoPoint::new(37.5665, 126.9780).expect("valid coordinate");
///         Ok(vec![Accommodation::new("Plaza", location, 200_000, 4.5).expect("valid")])
///     }
/// }
///
/// let hotels = OneHotel.fetch_accommodations(&ListingQuery::new("key"))?;
/// assert_eq!(hotels.len(), 1);
/// # Ok::<(), ListingError>(())
/// ```
pub trait AccommodationProvider: Send + Sync {
    /// Return the accommodations for `query` in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError`] when the listing cannot be retrieved or
    /// decoded.
    fn fetch_accommodations(&self, query: &ListingQuery)
    -> Result<Vec<Accommodation>, ListingError>;
}

impl<P: AccommodationProvider + ?Sized> AccommodationProvider for Box<P> {
    fn fetch_accommodations(
        &self,
        query: &ListingQuery,
    ) -> Result<Vec<Accommodation>, ListingError> {
        (**self).fetch_accommodations(query)
    }
}
