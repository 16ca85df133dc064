//! HTTP `AccommodationProvider` backed by TourAPI's `searchStay2` endpoint.
//!
//! The [`AccommodationProvider`] trait is synchronous to keep the core
//! library embeddable in synchronous contexts. This provider bridges the
//! async HTTP call to the sync interface by blocking on a Tokio runtime.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use staypoint_core::{
    Accommodation, AccommodationProvider, GeoPoint, ListingError, ListingQuery, PriceEstimator,
    RatingEstimator,
};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::tour_api::{StayEnvelope, StayItem};
use crate::coerce;
use crate::estimate::SeededEstimator;

/// Error type for [`HttpAccommodationProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid listing endpoint {url}")]
    Endpoint {
        /// Rejected base URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime")]
    Runtime(#[source] std::io::Error),
}

/// Default TourAPI service root.
pub const DEFAULT_BASE_URL: &str = "http://apis.data.go.kr/B551011/KorService2";

/// Application name reported to TourAPI in the `MobileApp` parameter.
pub const DEFAULT_MOBILE_APP: &str = "staypoint";

/// Default user agent for listing requests.
pub const DEFAULT_USER_AGENT: &str = "staypoint-listing/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Path of the accommodation search operation below the service root.
const SEARCH_STAY_PATH: &str = "searchStay2";

/// Configuration for [`HttpAccommodationProvider`].
#[derive(Debug, Clone)]
pub struct HttpAccommodationProviderConfig {
    /// Service root, e.g. `"http://apis.data.go.kr/B551011/KorService2"`.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Value sent as the `MobileApp` parameter.
    pub mobile_app: String,
}

impl Default for HttpAccommodationProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            mobile_app: DEFAULT_MOBILE_APP.to_owned(),
        }
    }
}

impl HttpAccommodationProviderConfig {
    /// Create a new configuration with the given service root.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `MobileApp` parameter.
    #[must_use]
    pub fn with_mobile_app(mut self, mobile_app: impl Into<String>) -> Self {
        self.mobile_app = mobile_app.into();
        self
    }
}

/// HTTP accommodation provider for TourAPI.
///
/// The listing carries names and coordinates only, so price and rating come
/// from the estimator `E`. Items without a title or with unusable
/// coordinates are skipped.
///
/// The service key is sent as a query parameter and percent-encoded by the
/// client, so supply the decoded form of the key. Error values carry the
/// endpoint without its query string.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime, it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Inside a
/// `current_thread` runtime it falls back to its own runtime, which may
/// deadlock if the caller's runtime drives IO this request depends on.
///
/// # Examples
///
/// ```no_run
/// use staypoint_core::{AccommodationProvider, ListingQuery};
/// use staypoint_data::HttpAccommodationProvider;
///
/// let provider = HttpAccommodationProvider::with_default_endpoint(42)?;
/// let hotels = provider.fetch_accommodations(&ListingQuery::new("service-key"))?;
/// println!("{} accommodations", hotels.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct HttpAccommodationProvider<E = SeededEstimator> {
    client: Client,
    config: HttpAccommodationProviderConfig,
    endpoint: Url,
    estimator: E,
    runtime: Runtime,
}

impl<E: std::fmt::Debug> std::fmt::Debug for HttpAccommodationProvider<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAccommodationProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("estimator", &self.estimator)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpAccommodationProvider<SeededEstimator> {
    /// Create a provider for the public TourAPI endpoint with seeded
    /// estimates.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_default_endpoint(seed: u64) -> Result<Self, ProviderBuildError> {
        Self::with_config(
            HttpAccommodationProviderConfig::default(),
            SeededEstimator::new(seed),
        )
    }
}

impl<E> HttpAccommodationProvider<E>
where
    E: PriceEstimator + RatingEstimator,
{
    /// Create a provider for `base_url` with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>, estimator: E) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpAccommodationProviderConfig::new(base_url), estimator)
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(
        config: HttpAccommodationProviderConfig,
        estimator: E,
    ) -> Result<Self, ProviderBuildError> {
        let endpoint = search_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            estimator,
            runtime,
        })
    }

    /// The `searchStay2` URL requests are sent to, without parameters.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn query_pairs(&self, query: &ListingQuery) -> [(&'static str, String); 8] {
        [
            ("ServiceKey", query.service_key().to_owned()),
            ("numOfRows", query.rows().to_string()),
            ("pageNo", query.page().to_string()),
            ("MobileOS", "ETC".to_owned()),
            ("MobileApp", self.config.mobile_app.clone()),
            ("arrange", "A".to_owned()),
            ("_type", "json".to_owned()),
            ("areaCode", query.area_code().to_string()),
        ]
    }

    async fn fetch_async(&self, query: &ListingQuery) -> Result<Vec<Accommodation>, ListingError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&self.query_pairs(query))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err))?;

        let envelope: StayEnvelope = response.json().await.map_err(|err| ListingError::Parse {
            message: err.without_url().to_string(),
        })?;

        self.convert_response(envelope)
    }

    /// Convert a reqwest error, dropping the URL so the key stays private.
    fn convert_reqwest_error(&self, error: reqwest::Error) -> ListingError {
        let url = self.endpoint.to_string();
        if error.is_timeout() {
            return ListingError::Timeout {
                url,
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        let status = error.status();
        let message = error.without_url().to_string();
        if let Some(code) = status {
            return ListingError::Http {
                url,
                status: code.as_u16(),
                message,
            };
        }

        ListingError::Network { url, message }
    }

    fn convert_response(&self, envelope: StayEnvelope) -> Result<Vec<Accommodation>, ListingError> {
        let response = envelope.response;
        if !response.header.is_ok() {
            return Err(ListingError::Service {
                code: response.header.result_code,
                message: response.header.result_msg,
            });
        }

        let body = response.body.ok_or_else(|| ListingError::Parse {
            message: "TourAPI response missing body".to_owned(),
        })?;
        let items = body.items.into_vec();
        debug!(
            "TourAPI returned {} items (total {})",
            items.len(),
            body.total_count.unwrap_or_default()
        );

        Ok(items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| self.accommodation_from_item(position, item))
            .collect())
    }

    fn accommodation_from_item(&self, position: usize, item: &StayItem) -> Option<Accommodation> {
        let Some(name) = coerce::name(Some(&item.title)) else {
            debug!("Skipped listing item {position}: missing title");
            return None;
        };
        let location = coerce::coordinate(Some(&item.mapy))
            .zip(coerce::coordinate(Some(&item.mapx)))
            .and_then(|(latitude, longitude)| GeoPoint::new(latitude, longitude).ok());
        let Some(location) = location else {
            debug!("Skipped listing item {name:?}: invalid coordinates");
            return None;
        };

        let price = self.estimator.estimate_price(&name, location);
        let rating = self.estimator.estimate_rating(&name, location);
        match Accommodation::new(&name, location, price, rating) {
            Ok(accommodation) => Some(accommodation),
            Err(err) => {
                warn!("Skipped listing item {name:?}: {err}");
                None
            }
        }
    }
}

impl<E> AccommodationProvider for HttpAccommodationProvider<E>
where
    E: PriceEstimator + RatingEstimator,
{
    /// Fetch one page of accommodations.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded (`flavor = "multi_thread"`). Otherwise the provider's
    /// internal runtime is used.
    fn fetch_accommodations(
        &self,
        query: &ListingQuery,
    ) -> Result<Vec<Accommodation>, ListingError> {
        let future = self.fetch_async(query);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}

fn search_endpoint(base_url: &str) -> Result<Url, ProviderBuildError> {
    let root = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&root)
        .and_then(|url| url.join(SEARCH_STAY_PATH))
        .map_err(|source| ProviderBuildError::Endpoint {
            url: base_url.to_owned(),
            source,
        })
}
