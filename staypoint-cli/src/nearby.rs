//! `nearby` command: find landmarks around a named accommodation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use staypoint_core::{Accommodation, NearbyPoint, Radius, nearby, rank_by_distance};
use staypoint_data::{DEFAULT_WRAPPER_KEY, load_datasets};

use crate::listing::{
    DefaultListingProviderBuilder, ListingConfig, ListingOptions, ListingProviderBuilder,
    fetch_listing, write_json,
};
use crate::{
    ARG_ACCOMMODATION, ARG_AREA_CODE, ARG_DATASET, ARG_ENDPOINT, ARG_RADIUS, ARG_RANK, ARG_ROWS,
    ARG_SEED, ARG_SERVICE_KEY, ARG_WRAPPER_KEY, CliError, ENV_NEARBY_ACCOMMODATION,
    ENV_NEARBY_DATASET, ENV_NEARBY_SERVICE_KEY,
};

/// Smallest radius offered, in metres.
pub(crate) const MIN_RADIUS_METERS: u32 = 500;
/// Largest radius offered, in metres.
pub(crate) const MAX_RADIUS_METERS: u32 = 2_000;
/// Granularity of the offered radii, in metres.
pub(crate) const RADIUS_STEP_METERS: u32 = 100;
/// Radius used when none is configured.
pub(crate) const DEFAULT_RADIUS_METERS: u32 = 1_000;

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Fetch the accommodation listing, select the named \
                 accommodation and print the landmarks from the given \
                 datasets that lie within the search radius. Datasets may \
                 use either supported column layout and are merged in the \
                 order given.",
    about = "Find landmarks near an accommodation"
)]
#[ortho_config(prefix = "STAYPOINT")]
pub(crate) struct NearbyArgs {
    /// Exact name of the accommodation to search around.
    #[arg(value_name = "name")]
    #[serde(default)]
    pub(crate) accommodation: Option<String>,
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
    /// Landmark dataset to search; repeat for several files.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Vec<Utf8PathBuf>>,
    /// Key wrapping the records inside each dataset.
    #[arg(long = ARG_WRAPPER_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) wrapper_key: Option<String>,
    /// Search radius in metres (500 to 2000 in steps of 100).
    #[arg(long = ARG_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius: Option<u32>,
    /// Sort matches nearest first and report their distances.
    #[arg(
        long = ARG_RANK,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) rank: Option<bool>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NearbyConfig {
    pub(crate) accommodation: String,
    pub(crate) listing: ListingConfig,
    pub(crate) datasets: Vec<Utf8PathBuf>,
    pub(crate) wrapper_key: String,
    pub(crate) radius_meters: u32,
    pub(crate) rank: bool,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let accommodation = args
            .accommodation
            .filter(|name| !name.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_ACCOMMODATION,
                env: ENV_NEARBY_ACCOMMODATION,
            })?;
        let datasets = args
            .dataset
            .filter(|paths| !paths.is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_DATASET,
                env: ENV_NEARBY_DATASET,
            })?;
        let listing = ListingConfig::resolve(
            ListingOptions {
                service_key: args.service_key,
                endpoint: args.endpoint,
                area_code: args.area_code,
                rows: args.rows,
                seed: args.seed,
            },
            ENV_NEARBY_SERVICE_KEY,
        )?;
        let radius_meters = validate_radius(args.radius.unwrap_or(DEFAULT_RADIUS_METERS))?;

        Ok(Self {
            accommodation,
            listing,
            datasets,
            wrapper_key: args
                .wrapper_key
                .unwrap_or_else(|| DEFAULT_WRAPPER_KEY.to_owned()),
            radius_meters,
            rank: args.rank.unwrap_or(false),
        })
    }
}

/// Accept only the radii the command offers.
pub(crate) fn validate_radius(value: u32) -> Result<u32, CliError> {
    let in_range = (MIN_RADIUS_METERS..=MAX_RADIUS_METERS).contains(&value);
    if in_range && value % RADIUS_STEP_METERS == 0 {
        Ok(value)
    } else {
        Err(CliError::RadiusOutOfRange {
            value,
            min: MIN_RADIUS_METERS,
            max: MAX_RADIUS_METERS,
            step: RADIUS_STEP_METERS,
        })
    }
}

/// Ranked matches around an accommodation.
#[derive(Debug, Serialize)]
pub(crate) struct RankedNearby {
    pub(crate) accommodation: Accommodation,
    pub(crate) radius: Radius,
    pub(crate) points: Vec<NearbyPoint>,
}

pub(super) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultListingProviderBuilder;
    run_nearby_with(args, &builder, &mut stdout)
}

pub(super) fn run_nearby_with(
    args: NearbyArgs,
    builder: &dyn ListingProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let listing = fetch_listing(&config.listing, builder)?;
    let accommodation = listing
        .find(&config.accommodation)
        .ok_or_else(|| CliError::UnknownAccommodation {
            name: config.accommodation.clone(),
        })?;
    let (_, candidates) =
        load_datasets(config.datasets.as_slice(), Some(config.wrapper_key.as_str()))?;
    let radius_meters = f64::from(config.radius_meters);

    if config.rank {
        let ranked = RankedNearby {
            accommodation: accommodation.clone(),
            radius: Radius::new(radius_meters)?,
            points: rank_by_distance(accommodation.location(), &candidates, radius_meters)?,
        };
        write_json(writer, &ranked)
    } else {
        let result = nearby(accommodation, &candidates, radius_meters)?;
        write_json(writer, &result)
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearbyConfig, CliError> {
    let merged = NearbyArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearbyConfig::try_from(merged)
}
