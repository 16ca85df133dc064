//! Test-only, in-memory `AccommodationProvider` used by unit and behaviour
//! tests.

use crate::{Accommodation, AccommodationProvider, ListingError, ListingQuery};

/// In-memory `AccommodationProvider` returning a fixed listing or error.
///
/// The provider ignores the query, which keeps scenario set-up short.
#[derive(Debug, Clone)]
pub struct StaticAccommodationProvider {
    response: Result<Vec<Accommodation>, ListingError>,
}

impl StaticAccommodationProvider {
    /// Create a provider that always returns `accommodations`.
    pub fn with_accommodations<I>(accommodations: I) -> Self
    where
        I: IntoIterator<Item = Accommodation>,
    {
        Self {
            response: Ok(accommodations.into_iter().collect()),
        }
    }

    /// Create a provider that always fails with `error`.
    #[must_use]
    pub const fn with_error(error: ListingError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl AccommodationProvider for StaticAccommodationProvider {
    fn fetch_accommodations(
        &self,
        _query: &ListingQuery,
    ) -> Result<Vec<Accommodation>, ListingError> {
        self.response.clone()
    }
}
