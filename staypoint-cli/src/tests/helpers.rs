//! Fixture builders shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use staypoint_core::{Accommodation, AccommodationProvider, GeoPoint};
use staypoint_core::test_support::StaticAccommodationProvider;
use std::fs;
use tempfile::TempDir;

use crate::CliError;
use crate::listing::{ListingConfig, ListingProviderBuilder};

/// Tourist street records around Seoul City Hall, in file order.
pub(super) const SEOUL_STREETS: &str = r#"{
  "DATA": [
    {"최종 표기명": "인사동길", "중심 좌표 X": "126.9853", "중심 좌표 Y": "37.5741"},
    {"최종 표기명": "명동길", "중심 좌표 X": "126.9850", "중심 좌표 Y": "37.5637"},
    {"최종 표기명": "덕수궁 돌담길", "중심 좌표 X": 126.9752, "중심 좌표 Y": 37.5656},
    {"최종 표기명": "가로수길", "중심 좌표 X": "127.0229", "중심 좌표 Y": "37.5205"},
    {"최종 표기명": "좌표 없음", "중심 좌표 X": "", "중심 좌표 Y": "37.5"}
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn plaza_hotel() -> Accommodation {
    let location = GeoPoint::new(37.5665, 126.978).expect("valid coordinate");
    Accommodation::new("Plaza Hotel", location, 210_000, 4.4).expect("valid accommodation")
}

/// Builder returning a fixed in-memory listing.
#[derive(Debug, Default)]
pub(super) struct StubListingProviderBuilder {
    pub(super) accommodations: Vec<Accommodation>,
}

impl ListingProviderBuilder for StubListingProviderBuilder {
    fn build(&self, _config: &ListingConfig) -> Result<Box<dyn AccommodationProvider>, CliError> {
        Ok(Box::new(StaticAccommodationProvider::with_accommodations(
            self.accommodations.clone(),
        )))
    }
}
