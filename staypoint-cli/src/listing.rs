//! Listing configuration and provider construction shared by the commands.

use std::fmt;
use std::io::Write;

use serde::Serialize;
use staypoint_core::{
    AccommodationListing, AccommodationProvider, DEFAULT_AREA_CODE, DEFAULT_ROWS, ListingQuery,
};
use staypoint_data::listing::HttpAccommodationProviderConfig;
use staypoint_data::{HttpAccommodationProvider, SeededEstimator};

use crate::{ARG_SERVICE_KEY, CliError};

/// Seed for estimated prices and ratings when none is configured.
pub(crate) const DEFAULT_SEED: u64 = 42;

/// Listing options as they arrive from the merged configuration layers.
#[derive(Debug, Clone, Default)]
pub(crate) struct ListingOptions {
    pub(crate) service_key: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) area_code: Option<u16>,
    pub(crate) rows: Option<u16>,
    pub(crate) seed: Option<u64>,
}

/// Resolved listing configuration.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct ListingConfig {
    pub(crate) service_key: String,
    pub(crate) endpoint: String,
    pub(crate) area_code: u16,
    pub(crate) rows: u16,
    pub(crate) seed: u64,
}

impl ListingConfig {
    /// Apply defaults, requiring a service key. `env` names the variable
    /// that supplies the key for the running subcommand.
    pub(crate) fn resolve(options: ListingOptions, env: &'static str) -> Result<Self, CliError> {
        let service_key = options
            .service_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_SERVICE_KEY,
                env,
            })?;
        let endpoint = options
            .endpoint
            .unwrap_or_else(|| HttpAccommodationProviderConfig::default().base_url);
        Ok(Self {
            service_key,
            endpoint,
            area_code: options.area_code.unwrap_or(DEFAULT_AREA_CODE),
            rows: options.rows.unwrap_or(DEFAULT_ROWS),
            seed: options.seed.unwrap_or(DEFAULT_SEED),
        })
    }

    pub(crate) fn query(&self) -> ListingQuery {
        ListingQuery::new(self.service_key.clone())
            .with_area_code(self.area_code)
            .with_rows(self.rows)
    }
}

impl fmt::Debug for ListingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingConfig")
            .field("service_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("area_code", &self.area_code)
            .field("rows", &self.rows)
            .field("seed", &self.seed)
            .finish()
    }
}

/// Builds the accommodation provider for the current invocation.
pub(crate) trait ListingProviderBuilder {
    fn build(&self, config: &ListingConfig) -> Result<Box<dyn AccommodationProvider>, CliError>;
}

pub(crate) struct DefaultListingProviderBuilder;

impl ListingProviderBuilder for DefaultListingProviderBuilder {
    fn build(&self, config: &ListingConfig) -> Result<Box<dyn AccommodationProvider>, CliError> {
        let provider = HttpAccommodationProvider::with_config(
            HttpAccommodationProviderConfig::new(config.endpoint.clone()),
            SeededEstimator::new(config.seed),
        )
        .map_err(|source| CliError::BuildProvider {
            endpoint: config.endpoint.clone(),
            source,
        })?;
        Ok(Box::new(provider))
    }
}

/// Fetch the configured page and key it by accommodation name.
pub(crate) fn fetch_listing(
    config: &ListingConfig,
    builder: &dyn ListingProviderBuilder,
) -> Result<AccommodationListing, CliError> {
    let provider = builder.build(config)?;
    let accommodations = provider
        .fetch_accommodations(&config.query())
        .map_err(CliError::Listing)?;
    Ok(accommodations.into_iter().collect())
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
