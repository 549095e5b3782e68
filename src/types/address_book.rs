//! Address book contacts.

use crate::field::Field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A saved contact location.
///
/// Contact updates are sent with explicit nulls kept, so setting a `Field`
/// member to [`Field::Null`] clears it on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBookContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_group: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_alias: Field<String>,

    #[serde(default)]
    pub address_1: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_2: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub first_name: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub last_name: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_email: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_phone_number: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_city: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_state_id: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_country_id: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_zip: Field<String>,

    #[serde(default)]
    pub cached_lat: f64,

    #[serde(default)]
    pub cached_lng: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curbside_lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curbside_lng: Option<f64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub color: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_custom_data: Field<Value>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub schedule: Field<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time_window_start: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time_window_end: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_route_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visited_timestamp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_routed_timestamp: Option<i64>,
}

/// Query of the address book endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressBookParameters {
    /// Comma-separated contact IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Comma-separated field names returned by searches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// `all`, `routed`, or `unrouted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}
