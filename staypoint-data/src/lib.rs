//! Data access for the Staypoint engine.
//!
//! Responsibilities:
//! - Normalize the published point-of-interest datasets into canonical
//!   records.
//! - Load dataset files from disk.
//! - Fetch accommodation listings from TourAPI, with estimated prices and
//!   ratings and time-bounded caching.
//!
//! Boundaries:
//! - Do not encode proximity rules (live in `staypoint-core`).
//! - Keep blocking I/O off async executors.
//!
//! Invariants:
//! - Record-level problems are logged and counted, never raised.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod coerce;
mod dataset;
mod estimate;
pub mod listing;
mod normalize;
mod records;
mod schema;

pub use dataset::{DatasetError, DatasetLoad, load_dataset, load_datasets};
pub use estimate::{FixedEstimator, PRICE_RANGE, SeededEstimator};
pub use listing::{
    CachedAccommodationProvider, HttpAccommodationProvider, HttpAccommodationProviderConfig,
    ProviderBuildError,
};
pub use normalize::{DEFAULT_WRAPPER_KEY, NormalizeReport, normalize, normalize_report};
pub use schema::{SchemaFields, SchemaKind};
