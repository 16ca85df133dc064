//! Recognised raw dataset schemas.
//!
//! Each public dataset names its columns differently. [`SchemaKind`] maps the
//! known layouts onto the canonical name, latitude and longitude fields.

use std::fmt;

use serde::Serialize;

/// Column names carrying the canonical fields for one schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaFields {
    /// Column holding the display name.
    pub name: &'static str,
    /// Column holding the latitude (the dataset's Y coordinate).
    pub latitude: &'static str,
    /// Column holding the longitude (the dataset's X coordinate).
    pub longitude: &'static str,
}

impl SchemaFields {
    const fn all(self) -> [&'static str; 3] {
        [self.longitude, self.latitude, self.name]
    }
}

/// Known dataset layouts, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Seoul tourist street dataset (`중심 좌표 X`, `중심 좌표 Y`, `최종 표기명`).
    TouristStreets,
    /// Jongno-gu attraction dataset (`X 좌표`, `Y 좌표`, `명칭`).
    JongnoAttractions,
}

impl SchemaKind {
    /// Every schema in detection order.
    pub const ALL: [Self; 2] = [Self::TouristStreets, Self::JongnoAttractions];

    /// Column names for this schema.
    #[must_use]
    pub const fn fields(self) -> SchemaFields {
        match self {
            Self::TouristStreets => SchemaFields {
                name: "최종 표기명",
                latitude: "중심 좌표 Y",
                longitude: "중심 좌표 X",
            },
            Self::JongnoAttractions => SchemaFields {
                name: "명칭",
                latitude: "Y 좌표",
                longitude: "X 좌표",
            },
        }
    }

    /// Pick the first schema whose fields are all present in `columns`.
    ///
    /// # Examples
    /// ```
    /// use staypoint_data::SchemaKind;
    ///
    /// let columns = ["X 좌표", "Y 좌표", "명칭", "주소"];
    /// assert_eq!(SchemaKind::detect(columns), Some(SchemaKind::JongnoAttractions));
    /// assert_eq!(SchemaKind::detect(["lat", "lng"]), None);
    /// ```
    #[must_use]
    pub fn detect<'a, I>(columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: Vec<&str> = columns.into_iter().collect();
        Self::ALL.into_iter().find(|kind| {
            kind.fields()
                .all()
                .iter()
                .all(|field| present.contains(field))
        })
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TouristStreets => f.write_str("tourist streets"),
            Self::JongnoAttractions => f.write_str("Jongno attractions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["중심 좌표 X", "중심 좌표 Y", "최종 표기명"], Some(SchemaKind::TouristStreets))]
    #[case(&["X 좌표", "Y 좌표", "명칭"], Some(SchemaKind::JongnoAttractions))]
    #[case(&["X 좌표", "Y 좌표"], None)]
    #[case(&["longitude", "latitude", "title"], None)]
    #[case(&[], None)]
    fn detects_schema_from_columns(
        #[case] columns: &[&str],
        #[case] expected: Option<SchemaKind>,
    ) {
        assert_eq!(SchemaKind::detect(columns.iter().copied()), expected);
    }

    #[rstest]
    fn first_schema_wins_when_both_match() {
        let columns = [
            "X 좌표",
            "Y 좌표",
            "명칭",
            "중심 좌표 X",
            "중심 좌표 Y",
            "최종 표기명",
        ];
        assert_eq!(SchemaKind::detect(columns), Some(SchemaKind::TouristStreets));
    }
}
