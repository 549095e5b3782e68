//! Activity feed entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_timestamp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_destination_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_contents: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Value>,
}

/// Query of the activity feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::query::flag::serialize")]
    pub team: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Unix timestamp lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
}
