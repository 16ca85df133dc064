//! Test utilities for listing providers.
//!
//! [`ManualClock`] drives cache expiry without sleeping and
//! [`CountingProvider`] records how often a listing was actually fetched.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use staypoint_core::{Accommodation, AccommodationProvider, ListingError, ListingQuery};

use super::cache::Clock;

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep a handle after moving
/// the clock into a cache.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }
}

impl ManualClock {
    /// Move the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += step;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Provider returning a fixed response and counting calls.
#[derive(Debug)]
pub struct CountingProvider {
    response: Result<Vec<Accommodation>, ListingError>,
    calls: AtomicUsize,
}

impl CountingProvider {
    /// Always return `accommodations`.
    pub fn with_accommodations<I>(accommodations: I) -> Self
    where
        I: IntoIterator<Item = Accommodation>,
    {
        Self {
            response: Ok(accommodations.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with `error`.
    #[must_use]
    pub const fn with_error(error: ListingError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AccommodationProvider for CountingProvider {
    fn fetch_accommodations(
        &self,
        _query: &ListingQuery,
    ) -> Result<Vec<Accommodation>, ListingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
