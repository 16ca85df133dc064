use thiserror::Error;

/// Errors from [`crate::listing::AccommodationProvider::fetch_accommodations`].
///
/// URLs carried by these variants never include the query string, so the
/// service credential does not leak into logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// The listing service could not be reached.
    #[error("failed to reach listing service at {url}: {message}")]
    Network {
        /// Endpoint that was requested.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The request exceeded its timeout.
    #[error("listing request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was requested.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("listing service at {url} returned HTTP {status}: {message}")]
    Http {
        /// Endpoint that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse listing response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
    /// The service reported an application-level error.
    #[error("listing service error {code}: {message}")]
    Service {
        /// Result code reported by the service.
        code: String,
        /// Result message reported by the service.
        message: String,
    },
}
