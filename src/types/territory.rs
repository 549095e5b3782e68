//! Geographic shapes: avoidance zones and territories.

use super::TerritoryType;
use crate::query::flag;
use serde::{Deserialize, Serialize};

/// A shape: a circle (`"lat,lng"` center and a radius), a polygon, or a
/// rectangle, each given as coordinate strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    #[serde(rename = "type")]
    pub territory_type: TerritoryType,

    #[serde(default)]
    pub data: Vec<String>,
}

/// Body of the avoidance zone and territory create/update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AvoidanceZoneParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory_name: Option<String>,

    /// Hex color without the leading `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<Territory>,

    #[serde(skip)]
    pub device_id: Option<String>,
}

/// An avoidance zone as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvoidanceZone {
    #[serde(default)]
    pub territory_id: String,

    #[serde(default)]
    pub territory_name: String,

    #[serde(default)]
    pub territory_color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territory: Option<Territory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AvoidanceZoneQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory_id: Option<String>,
}

/// A territory as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerritoryZone {
    #[serde(default)]
    pub territory_id: String,

    #[serde(default)]
    pub territory_name: String,

    #[serde(default)]
    pub territory_color: String,

    /// Address IDs inside the territory, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territory: Option<Territory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TerritoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub addresses: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn circle_zone_body() {
        let params = AvoidanceZoneParameters {
            territory_name: Some("Test Territory".to_string()),
            territory_color: Some("ff0000".to_string()),
            territory: Some(Territory {
                territory_type: TerritoryType::Circle,
                data: vec!["37.569752822786455,-77.47833251953125".to_string(), "5000".to_string()],
            }),
            device_id: Some("device-1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "territory_name": "Test Territory",
                "territory_color": "ff0000",
                "territory": {
                    "type": "circle",
                    "data": ["37.569752822786455,-77.47833251953125", "5000"]
                }
            })
        );
    }
}
