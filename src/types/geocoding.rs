//! Forward/reverse geocoding and the street-data lookups.

use serde::{Deserialize, Serialize};

/// Parameters of the geocoding calls.
///
/// `addresses` and `format` feed the geocoder; `pk`, `offset`, `limit`,
/// `zipcode`, and `housenumber` shape the street-data path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeocodingParameters {
    /// Newline- or comma-separated addresses, or `"lat,lng"` for reverse
    /// geocoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<String>,

    /// `xml` or `json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip)]
    pub pk: Option<u64>,

    #[serde(skip)]
    pub offset: Option<u32>,

    #[serde(skip)]
    pub limit: Option<u32>,

    #[serde(skip)]
    pub zipcode: Option<String>,

    #[serde(skip)]
    pub housenumber: Option<String>,
}

impl GeocodingParameters {
    /// `{offset}/{limit}/` when either is positive.
    pub(crate) fn window_segment(&self) -> Option<String> {
        let offset = self.offset.unwrap_or(0);
        let limit = self.limit.unwrap_or(0);
        (offset > 0 || limit > 0).then(|| format!("{}/{}/", offset, limit))
    }
}

/// A street known to the street-data service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreetRecord {
    #[serde(default)]
    pub zipcode: String,

    #[serde(default)]
    pub street_name: String,
}
