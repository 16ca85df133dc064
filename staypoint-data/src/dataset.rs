//! Loading raw datasets from disk.
//!
//! Files are opened through `cap-std` using ambient authority and parsed with
//! `serde_json` before normalization. Only structural failures surface as
//! errors; record-level problems are counted in the [`NormalizeReport`].

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use geo::{Coord, Rect};
use log::info;
use serde_json::Value;
use staypoint_core::{PointOfInterest, merge};
use thiserror::Error;

use crate::normalize::{NormalizeReport, normalize_report};

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("failed to open dataset {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file was not valid JSON.
    #[error("failed to parse dataset {path} as JSON")]
    Parse {
        /// Path whose contents failed to parse.
        path: Utf8PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
}

/// Points normalized from one dataset file.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetLoad {
    /// File the points were read from.
    pub path: Utf8PathBuf,
    /// Data-quality summary for the file.
    pub report: NormalizeReport,
    /// Normalized points in file order.
    pub points: Vec<PointOfInterest>,
}

impl DatasetLoad {
    /// Longitude/latitude rectangle covering every loaded point, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.points
            .iter()
            .map(|point| {
                let coord: Coord<f64> = point.location().into();
                Rect::new(coord, coord)
            })
            .reduce(union_bounds)
    }
}

fn union_bounds(left: Rect<f64>, right: Rect<f64>) -> Rect<f64> {
    let (left_min, left_max) = (left.min(), left.max());
    let (right_min, right_max) = (right.min(), right.max());
    Rect::new(
        Coord {
            x: left_min.x.min(right_min.x),
            y: left_min.y.min(right_min.y),
        },
        Coord {
            x: left_max.x.max(right_max.x),
            y: left_max.y.max(right_max.y),
        },
    )
}

/// Read, parse and normalize one dataset file.
///
/// # Errors
///
/// Returns [`DatasetError::Open`] when the file cannot be opened and
/// [`DatasetError::Parse`] when it is not JSON.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use staypoint_data::{DEFAULT_WRAPPER_KEY, load_dataset};
///
/// # fn main() -> Result<(), staypoint_data::DatasetError> {
/// let load = load_dataset(Utf8Path::new("data/tourist_streets.json"), Some(DEFAULT_WRAPPER_KEY))?;
/// println!("{} points, {} dropped", load.points.len(), load.report.dropped);
/// # Ok(())
/// # }
/// ```
pub fn load_dataset(
    path: &Utf8Path,
    wrapper_key: Option<&str>,
) -> Result<DatasetLoad, DatasetError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        DatasetError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let raw: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let (points, report) = normalize_report(&raw, wrapper_key);
    info!(
        "Loaded dataset {path}: schema={:?}, kept={}, dropped={}",
        report.schema,
        report.kept(),
        report.dropped
    );
    Ok(DatasetLoad {
        path: path.to_path_buf(),
        report,
        points,
    })
}

/// Load several dataset files and merge their points in path order.
///
/// Loading stops at the first file that fails.
///
/// # Errors
///
/// Returns the first [`DatasetError`] encountered.
pub fn load_datasets<P>(
    paths: &[P],
    wrapper_key: Option<&str>,
) -> Result<(Vec<DatasetLoad>, Vec<PointOfInterest>), DatasetError>
where
    P: AsRef<Utf8Path>,
{
    let loads = paths
        .iter()
        .map(|path| load_dataset(path.as_ref(), wrapper_key))
        .collect::<Result<Vec<_>, _>>()?;
    let points = merge(loads.iter().map(|load| load.points.clone()));
    Ok((loads, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_WRAPPER_KEY;
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn utf8(file: &NamedTempFile) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf-8 temp path")
    }

    #[fixture]
    fn jongno() -> NamedTempFile {
        write_json(
            r#"{"DATA": [
                {"X 좌표": 126.977, "Y 좌표": 37.5796, "명칭": "Gyeongbokgung"},
                {"X 좌표": 126.991, "Y 좌표": 37.5794, "명칭": "Changdeokgung"},
                {"X 좌표": "", "Y 좌표": 37.5, "명칭": "Unmapped"}
            ]}"#,
        )
    }

    #[fixture]
    fn streets() -> NamedTempFile {
        write_json(
            r#"{"DATA": [
                {"중심 좌표 X": "126.9850", "중심 좌표 Y": "37.5740", "최종 표기명": "Insadong-gil"}
            ]}"#,
        )
    }

    #[rstest]
    fn loads_and_reports(jongno: NamedTempFile) {
        let path = utf8(&jongno);
        let load = load_dataset(&path, Some(DEFAULT_WRAPPER_KEY)).expect("dataset loads");
        assert_eq!(load.path, path);
        assert_eq!(load.points.len(), 2);
        assert_eq!(load.report.dropped, 1);

        let bounds = load.bounds().expect("points present");
        assert_eq!(bounds.min(), Coord { x: 126.977, y: 37.5794 });
        assert_eq!(bounds.max(), Coord { x: 126.991, y: 37.5796 });
    }

    #[rstest]
    fn merges_in_path_order(jongno: NamedTempFile, streets: NamedTempFile) {
        let paths = [utf8(&streets), utf8(&jongno)];
        let (loads, points) =
            load_datasets(&paths, Some(DEFAULT_WRAPPER_KEY)).expect("datasets load");
        assert_eq!(loads.len(), 2);
        let names: Vec<_> = points.iter().map(PointOfInterest::name).collect();
        assert_eq!(names, vec!["Insadong-gil", "Gyeongbokgung", "Changdeokgung"]);
    }

    #[rstest]
    fn missing_file_is_an_open_error() {
        let dir = TempDir::new().expect("temp dir");
        let missing = Utf8PathBuf::from_path_buf(dir.path().join("missing.json"))
            .expect("utf-8 temp path");
        let err = load_dataset(&missing, None).expect_err("missing file");
        match err {
            DatasetError::Open { path, .. } => assert_eq!(path, missing),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[rstest]
    fn invalid_json_is_a_parse_error() {
        let file = write_json("{not json");
        let err = load_dataset(&utf8(&file), None).expect_err("invalid json");
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[rstest]
    fn unknown_schema_loads_empty() {
        let file = write_json(r#"[{"lat": 37.5, "lng": 127.0}]"#);
        let load = load_dataset(&utf8(&file), None).expect("dataset loads");
        assert!(load.points.is_empty());
        assert!(load.bounds().is_none());
    }
}
