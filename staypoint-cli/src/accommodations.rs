//! `accommodations` command: fetch and print the accommodation listing.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::listing::{
    DefaultListingProviderBuilder, ListingConfig, ListingOptions, ListingProviderBuilder,
    fetch_listing, write_json,
};
use crate::{
    ARG_AREA_CODE, ARG_ENDPOINT, ARG_ROWS, ARG_SEED, ARG_SERVICE_KEY, CliError,
    ENV_ACCOMMODATIONS_SERVICE_KEY,
};

/// CLI arguments for the `accommodations` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Fetch one page of accommodations from the Korea Tourism \
                 Organization TourAPI and print them as JSON. Prices and \
                 ratings are estimated from a seeded generator because the \
                 service does not publish them.",
    about = "List accommodations with estimated prices and ratings"
)]
#[ortho_config(prefix = "STAYPOINT")]
pub(crate) struct AccommodationsArgs {
    /// TourAPI service key.
    #[arg(long = ARG_SERVICE_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) service_key: Option<String>,
    /// Base URL of the TourAPI service.
    #[arg(long = ARG_ENDPOINT, value_name = "url")]
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    /// TourAPI area code (1 is Seoul).
    #[arg(long = ARG_AREA_CODE, value_name = "code")]
    #[serde(default)]
    pub(crate) area_code: Option<u16>,
    /// Number of accommodations to request.
    #[arg(long = ARG_ROWS, value_name = "count")]
    #[serde(default)]
    pub(crate) rows: Option<u16>,
    /// Seed for estimated prices and ratings.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl AccommodationsArgs {
    pub(crate) fn into_config(self) -> Result<ListingConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ListingConfig::try_from(merged)
    }
}

impl TryFrom<AccommodationsArgs> for ListingConfig {
    type Error = CliError;

    fn try_from(args: AccommodationsArgs) -> Result<Self, Self::Error> {
        let options = ListingOptions {
            service_key: args.service_key,
            endpoint: args.endpoint,
            area_code: args.area_code,
            rows: args.rows,
            seed: args.seed,
        };
        Self::resolve(options, ENV_ACCOMMODATIONS_SERVICE_KEY)
    }
}

pub(super) fn run_accommodations(args: AccommodationsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultListingProviderBuilder;
    run_accommodations_with(args, &builder, &mut stdout)
}

pub(super) fn run_accommodations_with(
    args: AccommodationsArgs,
    builder: &dyn ListingProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let listing = fetch_listing(&config, builder)?;
    write_json(writer, &listing)
}

#[cfg(test)]
pub(crate) fn accommodations_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ListingConfig, CliError> {
    let merged = AccommodationsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ListingConfig::try_from(merged)
}
