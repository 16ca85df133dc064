//! Behavioural tests for loading and normalizing dataset files.

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use staypoint_core::PointOfInterest;
use staypoint_data::{DEFAULT_WRAPPER_KEY, DatasetLoad, load_datasets};
use std::cell::RefCell;

#[derive(Default)]
struct DatasetWorld {
    paths: RefCell<Vec<Utf8PathBuf>>,
    loads: RefCell<Vec<DatasetLoad>>,
    points: RefCell<Vec<PointOfInterest>>,
}

#[fixture]
fn world() -> DatasetWorld {
    DatasetWorld::default()
}

fn fixture_path(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn assert_point_count(world: &DatasetWorld, expected: usize) {
    let points = world.points.borrow();
    assert_eq!(points.len(), expected, "unexpected points: {points:?}");
}

fn assert_first_point(world: &DatasetWorld, name: &str, latitude: f64, longitude: f64) {
    let points = world.points.borrow();
    let first = points.first().expect("at least one point");
    assert_eq!(first.name(), name);
    assert!((first.location().latitude() - latitude).abs() < 1e-9);
    assert!((first.location().longitude() - longitude).abs() < 1e-9);
}

// --- Given steps ---

#[given("the tourist street dataset")]
fn tourist_street_dataset(world: &DatasetWorld) {
    world
        .paths
        .borrow_mut()
        .push(fixture_path("tourist_streets.json"));
}

#[given("the Jongno attraction dataset")]
fn jongno_dataset(world: &DatasetWorld) {
    world
        .paths
        .borrow_mut()
        .push(fixture_path("jongno_attractions.json"));
}

#[given("a dataset with an unknown schema")]
fn unknown_dataset(world: &DatasetWorld) {
    world
        .paths
        .borrow_mut()
        .push(fixture_path("unknown_schema.json"));
}

// --- When steps ---

#[when("I load the datasets")]
fn load(world: &DatasetWorld) {
    let paths = world.paths.borrow();
    let (loads, points) =
        load_datasets(paths.as_slice(), Some(DEFAULT_WRAPPER_KEY)).expect("fixtures should load");
    world.loads.replace(loads);
    world.points.replace(points);
}

// --- Then steps ---

#[then("4 points of interest are produced")]
fn four_points(world: &DatasetWorld) {
    assert_point_count(world, 4);
}

#[then("3 points of interest are produced")]
fn three_points(world: &DatasetWorld) {
    assert_point_count(world, 3);
}

#[then("7 points of interest are produced")]
fn seven_points(world: &DatasetWorld) {
    assert_point_count(world, 7);
}

#[then("no points of interest are produced")]
fn no_points(world: &DatasetWorld) {
    assert_point_count(world, 0);
}

#[then("1 record is reported as dropped")]
fn one_dropped(world: &DatasetWorld) {
    let loads = world.loads.borrow();
    let dropped: usize = loads.iter().map(|load| load.report.dropped).sum();
    assert_eq!(dropped, 1);
}

#[then("the first point is Insadong-gil at its published coordinates")]
fn first_is_insadong(world: &DatasetWorld) {
    assert_first_point(world, "인사동길", 37.5741, 126.9853);
}

#[then("the first point is Gyeongbokgung at its published coordinates")]
fn first_is_gyeongbokgung(world: &DatasetWorld) {
    assert_first_point(world, "경복궁", 37.5796, 126.977);
}

// --- Scenario registrations ---

#[scenario(path = "tests/features/normalize.feature", index = 0)]
fn mapping_tourist_streets(world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/normalize.feature", index = 1)]
fn dropping_unmapped_record(world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/normalize.feature", index = 2)]
fn ignoring_unknown_schema(world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/normalize.feature", index = 3)]
fn merging_in_order(world: DatasetWorld) {
    let _ = world;
}
