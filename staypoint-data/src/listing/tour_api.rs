//! TourAPI `searchStay2` response types.
//!
//! The service wraps everything in `response.header` and `response.body`.
//! Two quirks shape these types: `items` is an empty string rather than an
//! object when the page is empty, and `item` is a bare object rather than a
//! one-element array when exactly one accommodation matches.

use serde::Deserialize;
use serde_json::Value;

/// Result code TourAPI reports on success.
pub(crate) const SUCCESS_CODE: &str = "0000";

/// Top-level `searchStay2` document.
#[derive(Debug, Deserialize)]
pub(crate) struct StayEnvelope {
    pub response: StayResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StayResponse {
    pub header: ResponseHeader,
    #[serde(default)]
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

impl ResponseHeader {
    pub(crate) fn is_ok(&self) -> bool {
        self.result_code == SUCCESS_CODE
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub items: Items,
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Items {
    Present { item: OneOrMany },
    /// TourAPI sends `""` in place of an empty `items` object.
    Empty(
        #[expect(dead_code, reason = "only the shape is matched; the text is always empty")]
        String,
    ),
}

impl Default for Items {
    fn default() -> Self {
        Self::Empty(String::new())
    }
}

impl Items {
    pub(crate) fn into_vec(self) -> Vec<StayItem> {
        match self {
            Self::Present {
                item: OneOrMany::Many(items),
            } => items,
            Self::Present {
                item: OneOrMany::One(item),
            } => vec![item],
            Self::Empty(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    Many(Vec<StayItem>),
    One(StayItem),
}

/// One accommodation as published. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
pub(crate) struct StayItem {
    #[serde(default)]
    pub title: Value,
    /// Longitude.
    #[serde(default)]
    pub mapx: Value,
    /// Latitude.
    #[serde(default)]
    pub mapy: Value,
}
