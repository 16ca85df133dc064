//! Focused unit tests covering CLI configuration and radius validation.

use super::helpers::{StubListingProviderBuilder, plaza_hotel, utf8_tempdir};
use super::*;
use crate::accommodations::{AccommodationsArgs, accommodations_config_from_layers_for_test};
use crate::listing::{DEFAULT_SEED, ListingConfig, fetch_listing, write_json};
use crate::nearby::{
    DEFAULT_RADIUS_METERS, MAX_RADIUS_METERS, MIN_RADIUS_METERS, NearbyArgs, NearbyConfig,
    config_from_layers_for_test, validate_radius,
};
use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;
use staypoint_core::{DEFAULT_AREA_CODE, DEFAULT_ROWS};
use staypoint_data::DEFAULT_WRAPPER_KEY;
use staypoint_data::listing::DEFAULT_BASE_URL;

fn complete_nearby_args() -> NearbyArgs {
    NearbyArgs {
        accommodation: Some("Plaza Hotel".to_owned()),
        service_key: Some("key".to_owned()),
        dataset: Some(vec![Utf8PathBuf::from("streets.json")]),
        ..NearbyArgs::default()
    }
}

#[rstest]
fn nearby_config_applies_defaults() {
    let config = NearbyConfig::try_from(complete_nearby_args()).expect("config should build");
    assert_eq!(config.accommodation, "Plaza Hotel");
    assert_eq!(config.datasets, vec![Utf8PathBuf::from("streets.json")]);
    assert_eq!(config.wrapper_key, DEFAULT_WRAPPER_KEY);
    assert_eq!(config.radius_meters, DEFAULT_RADIUS_METERS);
    assert!(!config.rank);
    assert_eq!(config.listing.endpoint, DEFAULT_BASE_URL);
    assert_eq!(config.listing.area_code, DEFAULT_AREA_CODE);
    assert_eq!(config.listing.rows, DEFAULT_ROWS);
    assert_eq!(config.listing.seed, DEFAULT_SEED);
}

#[rstest]
#[case::accommodation(ARG_ACCOMMODATION, ENV_NEARBY_ACCOMMODATION)]
#[case::dataset(ARG_DATASET, ENV_NEARBY_DATASET)]
#[case::service_key(ARG_SERVICE_KEY, ENV_NEARBY_SERVICE_KEY)]
fn converting_nearby_without_required_fields_errors(
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let mut args = complete_nearby_args();
    match field {
        ARG_ACCOMMODATION => args.accommodation = None,
        ARG_DATASET => args.dataset = Some(Vec::new()),
        _ => args.service_key = Some("   ".to_owned()),
    }

    let err = NearbyConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn accommodations_reports_its_own_environment_variable() {
    let err = ListingConfig::try_from(AccommodationsArgs::default()).expect_err("missing key");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SERVICE_KEY);
            assert_eq!(env, ENV_ACCOMMODATIONS_SERVICE_KEY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(MIN_RADIUS_METERS)]
#[case(1_300)]
#[case(MAX_RADIUS_METERS)]
fn accepts_offered_radii(#[case] radius: u32) {
    assert_eq!(validate_radius(radius).expect("offered radius"), radius);
}

#[rstest]
#[case(0)]
#[case(400)]
#[case(1_050)]
#[case(2_100)]
fn rejects_radii_outside_the_offered_steps(#[case] radius: u32) {
    let err = validate_radius(radius).expect_err("radius should be rejected");
    match err {
        CliError::RadiusOutOfRange {
            value,
            min,
            max,
            step,
        } => {
            assert_eq!(value, radius);
            assert_eq!((min, max, step), (500, 2_000, 100));
        }
        other => panic!("expected RadiusOutOfRange, found {other:?}"),
    }
}

#[rstest]
fn listing_config_debug_redacts_service_key() {
    let config = NearbyConfig::try_from(NearbyArgs {
        service_key: Some("very-secret".to_owned()),
        ..complete_nearby_args()
    })
    .expect("config should build");
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("very-secret"));
    assert_eq!(config.listing.query().service_key(), "very-secret");
}

#[rstest]
fn merge_layers_honours_precedence() {
    let (_tmp, root) = utf8_tempdir();
    let file_dataset = root.join("from-file.json");
    let env_dataset = root.join("from-env.json");

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "service_key": "from-file",
            "dataset": [file_dataset.as_str()],
            "radius": 1500,
            "endpoint": "http://from-file:8080",
        }),
        None,
    );
    composer.push_environment(json!({
        "service_key": "from-env",
        "dataset": [env_dataset.as_str()],
        "radius": 800,
    }));
    composer.push_cli(json!({
        "accommodation": "Plaza Hotel",
        "radius": 600,
        "rank": true,
    }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.accommodation, "Plaza Hotel");
    assert_eq!(config.listing.service_key, "from-env");
    assert_eq!(config.listing.endpoint, "http://from-file:8080");
    assert!(config.datasets.contains(&env_dataset));
    assert_eq!(config.radius_meters, 600);
    assert!(config.rank);
}

#[rstest]
fn invalid_layer_maps_to_configuration_error() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "radius": "wide" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn accommodations_layers_resolve_listing_options() {
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "service_key": "from-env", "rows": 10 }));
    composer.push_cli(json!({ "area_code": 6, "seed": 7 }));

    let config = accommodations_config_from_layers_for_test(composer.layers()).expect("config");
    let query = config.query();
    assert_eq!(query.service_key(), "from-env");
    assert_eq!(query.rows(), 10);
    assert_eq!(query.area_code(), 6);
    assert_eq!(config.seed, 7);
}

#[rstest]
fn fetch_listing_keys_accommodations_by_name() {
    let builder = StubListingProviderBuilder {
        accommodations: vec![plaza_hotel(), plaza_hotel()],
    };
    let config = NearbyConfig::try_from(complete_nearby_args()).expect("config should build");

    let listing = fetch_listing(&config.listing, &builder).expect("listing");
    assert_eq!(listing.len(), 1);
    assert!(listing.find("Plaza Hotel").is_some());
}

#[rstest]
fn write_json_terminates_output_with_newline() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &json!({ "ok": true })).expect("write json");
    let text = String::from_utf8(buffer).expect("utf-8");
    assert!(text.ends_with("}\n"));
}
