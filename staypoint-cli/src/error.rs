//! Error types emitted by the Staypoint CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use staypoint_core::{ListingError, ProximityError};
use staypoint_data::{DatasetError, ProviderBuildError};
use thiserror::Error;

/// Errors emitted by the Staypoint CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The search radius is not one of the offered steps.
    #[error("radius {value} m must be between {min} and {max} m in steps of {step} m")]
    RadiusOutOfRange {
        value: u32,
        min: u32,
        max: u32,
        step: u32,
    },
    /// Constructing the accommodation provider failed.
    #[error("failed to build accommodation provider for {endpoint:?}: {source}")]
    BuildProvider {
        endpoint: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Fetching the accommodation listing failed.
    #[error("failed to fetch accommodations: {0}")]
    Listing(#[source] ListingError),
    /// The named accommodation is not in the listing.
    #[error("no accommodation named {name:?} in the listing")]
    UnknownAccommodation { name: String },
    /// Loading a point-of-interest dataset failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// The proximity search rejected its arguments.
    #[error(transparent)]
    Proximity(#[from] ProximityError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
