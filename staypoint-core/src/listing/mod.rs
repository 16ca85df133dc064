//! Fetch the accommodations a search can be centred on.
//!
//! The `AccommodationProvider` trait abstracts the listing source. Callers
//! pass a [`ListingQuery`] and receive validated
//! [`Accommodation`](crate::Accommodation) values; pagination, field
//! defaults and display attributes are the provider's concern.

mod error;
mod provider;
mod query;

pub use error::ListingError;
pub use provider::AccommodationProvider;
pub use query::{DEFAULT_AREA_CODE, DEFAULT_ROWS, ListingQuery};
