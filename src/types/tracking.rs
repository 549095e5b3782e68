//! GPS tracking and asset status.

use super::DeviceType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded device position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingHistory {
    /// Speed.
    #[serde(default, rename = "s", skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    #[serde(default, rename = "lt", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,

    #[serde(default, rename = "lg", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,

    /// Heading.
    #[serde(default, rename = "d", skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    #[serde(default, rename = "ts", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, rename = "ts_friendly", skip_serializing_if = "Option::is_none")]
    pub timestamp_friendly: Option<String>,

    #[serde(default, rename = "src", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Query of the GPS endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GpsParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,

    #[serde(rename = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(rename = "lng", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_timestamp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    /// `today`, `yesterday`, `thismonth`, `7days`, `14days`, `30days`, or
    /// `custom` with `start_date`/`end_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::query::flag::serialize")]
    pub last_position: Option<bool>,
}

/// Delivery status of a tracked asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindAssetResponse {
    #[serde(default)]
    pub tracking_number: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_history: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<AssetLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arrival: Vec<AssetArrival>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetLocation {
    #[serde(default, rename = "lat")]
    pub latitude: f64,

    #[serde(default, rename = "lng")]
    pub longitude: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetArrival {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_unix_timestamp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_unix_timestamp: Option<i64>,
}
