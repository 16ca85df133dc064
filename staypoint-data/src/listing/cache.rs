//! Time-bounded memoization of listing requests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use log::debug;
use staypoint_core::{Accommodation, AccommodationProvider, ListingError, ListingQuery};

/// Default lifetime of a cached listing.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3_600);

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    accommodations: Vec<Accommodation>,
}

/// Memoize an [`AccommodationProvider`] per [`ListingQuery`].
///
/// A cached listing is served until `ttl` has elapsed since it was fetched;
/// the next request then refetches it. Failures are passed through and never
/// cached, so a transient outage does not stick.
///
/// The lock is not held while the inner provider runs, so concurrent misses
/// for the same query may each fetch.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use staypoint_core::{AccommodationProvider, ListingQuery};
/// use staypoint_core::test_support::StaticAccommodationProvider;
/// use staypoint_data::CachedAccommodationProvider;
///
/// let cached = CachedAccommodationProvider::new(
///     StaticAccommodationProvider::with_accommodations([]),
///     Duration::from_secs(60),
/// );
/// assert!(cached.fetch_accommodations(&ListingQuery::new("key"))?.is_empty());
/// assert_eq!(cached.len(), 1);
/// # Ok::<(), staypoint_core::ListingError>(())
/// ```
#[derive(Debug)]
pub struct CachedAccommodationProvider<P, C = SystemClock> {
    inner: P,
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<ListingQuery, CacheEntry>>,
}

impl<P> CachedAccommodationProvider<P, SystemClock> {
    /// Cache `inner` for `ttl` using the system clock.
    #[must_use]
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self::with_clock(inner, ttl, SystemClock)
    }
}

impl<P, C> CachedAccommodationProvider<P, C> {
    /// Cache `inner` for `ttl`, reading time from `clock`.
    #[must_use]
    pub fn with_clock(inner: P, ttl: Duration, clock: C) -> Self {
        Self {
            inner,
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Configured lifetime of a cached listing.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of cached queries.
    ///
    /// Expired entries are pruned when the next listing is stored, so they
    /// may still be counted until then.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached listing.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// The wrapped provider.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.fetched_at) < self.ttl
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ListingQuery, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P, C> AccommodationProvider for CachedAccommodationProvider<P, C>
where
    P: AccommodationProvider,
    C: Clock,
{
    fn fetch_accommodations(
        &self,
        query: &ListingQuery,
    ) -> Result<Vec<Accommodation>, ListingError> {
        let now = self.clock.now();
        if let Some(entry) = self.lock().get(query)
            && self.is_fresh(entry, now)
        {
            debug!("Serving cached listing for {query:?}");
            return Ok(entry.accommodations.clone());
        }

        let accommodations = self.inner.fetch_accommodations(query)?;
        let fetched_at = self.clock.now();
        let mut entries = self.lock();
        entries.retain(|_, entry| self.is_fresh(entry, fetched_at));
        entries.insert(
            query.clone(),
            CacheEntry {
                fetched_at,
                accommodations: accommodations.clone(),
            },
        );
        Ok(accommodations)
    }
}
