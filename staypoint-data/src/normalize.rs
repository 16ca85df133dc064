//! Conversion of raw public datasets into canonical points of interest.
//!
//! Normalization never fails: an unrecognised layout or schema yields no
//! points, and records without a usable name and coordinate pair are dropped.
//! Both outcomes are logged and counted in a [`NormalizeReport`].

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use staypoint_core::{GeoPoint, PointOfInterest};

use crate::coerce;
use crate::records::{self, Row};
use crate::schema::{SchemaFields, SchemaKind};

/// Container key the published datasets wrap their records in.
pub const DEFAULT_WRAPPER_KEY: &str = "DATA";

/// Data-quality summary for one normalized source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// Schema the source matched, if any.
    pub schema: Option<SchemaKind>,
    /// Number of records found in the source, including array entries that
    /// are not objects.
    pub total_records: usize,
    /// Records that did not become points of interest.
    pub dropped: usize,
}

impl NormalizeReport {
    /// Records that became points of interest.
    #[must_use]
    pub const fn kept(&self) -> usize {
        self.total_records.saturating_sub(self.dropped)
    }
}

/// Normalize one raw source into points of interest, in input order.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use staypoint_data::{DEFAULT_WRAPPER_KEY, normalize};
///
/// let raw = json!({"DATA": [
///     {"중심 좌표 X": "126.9850", "중심 좌표 Y": "37.5740", "최종 표기명": "Insadong-gil"},
///     {"중심 좌표 X": "", "중심 좌표 Y": "37.5", "최종 표기명": "Broken"},
/// ]});
/// let points = normalize(&raw, Some(DEFAULT_WRAPPER_KEY));
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].name(), "Insadong-gil");
/// ```
#[must_use]
pub fn normalize(raw: &Value, wrapper_key: Option<&str>) -> Vec<PointOfInterest> {
    normalize_report(raw, wrapper_key).0
}

/// Normalize one raw source and report what was kept.
#[must_use]
pub fn normalize_report(
    raw: &Value,
    wrapper_key: Option<&str>,
) -> (Vec<PointOfInterest>, NormalizeReport) {
    let collection = records::unwrap_container(raw, wrapper_key);
    let Some(parsed) = records::rows(collection) else {
        warn!("Skipped dataset: no record array or column table found");
        return (Vec::new(), NormalizeReport::default());
    };
    if parsed.skipped > 0 {
        debug!("Dropped {} entries that are not objects", parsed.skipped);
    }

    let total_records = parsed.total();
    let Some(schema) = SchemaKind::detect(records::column_union(&parsed.rows)) else {
        warn!("Skipped dataset: {total_records} records match no known schema");
        return (
            Vec::new(),
            NormalizeReport {
                schema: None,
                total_records,
                dropped: total_records,
            },
        );
    };

    let fields = schema.fields();
    let points: Vec<PointOfInterest> = parsed
        .rows
        .iter()
        .enumerate()
        .filter_map(|(position, row)| {
            let point = point_from_row(row, fields);
            if point.is_none() {
                debug!("Dropped {schema} record {position}: missing name or invalid coordinates");
            }
            point
        })
        .collect();

    let report = NormalizeReport {
        schema: Some(schema),
        total_records,
        dropped: total_records - points.len(),
    };
    (points, report)
}

fn point_from_row(row: &Row<'_>, fields: SchemaFields) -> Option<PointOfInterest> {
    let longitude = coerce::coordinate(row.get(fields.longitude).copied())?;
    let latitude = coerce::coordinate(row.get(fields.latitude).copied())?;
    let name = coerce::name(row.get(fields.name).copied())?;
    let location = GeoPoint::new(latitude, longitude).ok()?;
    PointOfInterest::new(name, location).ok()
}
