//! Command-line interface for finding landmarks near an accommodation.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod accommodations;
mod error;
mod listing;
mod nearby;

use accommodations::{AccommodationsArgs, run_accommodations};
pub use error::CliError;
use nearby::{NearbyArgs, run_nearby};

pub(crate) const ARG_ACCOMMODATION: &str = "accommodation";
pub(crate) const ARG_SERVICE_KEY: &str = "service-key";
pub(crate) const ARG_ENDPOINT: &str = "endpoint";
pub(crate) const ARG_AREA_CODE: &str = "area-code";
pub(crate) const ARG_ROWS: &str = "rows";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_WRAPPER_KEY: &str = "wrapper-key";
pub(crate) const ARG_RADIUS: &str = "radius";
pub(crate) const ARG_RANK: &str = "rank";
pub(crate) const ENV_ACCOMMODATIONS_SERVICE_KEY: &str =
    "STAYPOINT_CMDS_ACCOMMODATIONS_SERVICE_KEY";
pub(crate) const ENV_NEARBY_SERVICE_KEY: &str = "STAYPOINT_CMDS_NEARBY_SERVICE_KEY";
pub(crate) const ENV_NEARBY_ACCOMMODATION: &str = "STAYPOINT_CMDS_NEARBY_ACCOMMODATION";
pub(crate) const ENV_NEARBY_DATASET: &str = "STAYPOINT_CMDS_NEARBY_DATASET";

/// Run the Staypoint CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Accommodations(args) => run_accommodations(args),
        Command::Nearby(args) => run_nearby(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "staypoint",
    about = "Find tourist landmarks within walking distance of an accommodation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List accommodations from TourAPI with estimated prices and ratings.
    Accommodations(AccommodationsArgs),
    /// Find landmarks around a named accommodation.
    Nearby(NearbyArgs),
}

#[cfg(test)]
mod tests;
