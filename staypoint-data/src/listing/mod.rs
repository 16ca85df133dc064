//! Accommodation listings from TourAPI.
//!
//! [`HttpAccommodationProvider`] implements
//! [`staypoint_core::AccommodationProvider`] against the Korea Tourism
//! Organization's `searchStay2` endpoint, and
//! [`CachedAccommodationProvider`] memoizes any provider for a fixed time.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use staypoint_core::{AccommodationProvider, ListingQuery};
//! use staypoint_data::listing::{
//!     CachedAccommodationProvider, DEFAULT_CACHE_TTL, HttpAccommodationProvider,
//!     HttpAccommodationProviderConfig,
//! };
//! use staypoint_data::SeededEstimator;
//!
//! let config = HttpAccommodationProviderConfig::default()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpAccommodationProvider::with_config(config, SeededEstimator::new(7))?;
//! let cached = CachedAccommodationProvider::new(provider, DEFAULT_CACHE_TTL);
//!
//! let query = ListingQuery::new("service-key");
//! let hotels = cached.fetch_accommodations(&query)?;
//! println!("{} accommodations", hotels.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cache;
mod provider;
mod tour_api;

#[doc(hidden)]
pub mod test_support;

pub use cache::{CachedAccommodationProvider, Clock, DEFAULT_CACHE_TTL, SystemClock};
pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_MOBILE_APP, DEFAULT_USER_AGENT, HttpAccommodationProvider,
    HttpAccommodationProviderConfig, ProviderBuildError,
};
