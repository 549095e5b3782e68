//! Orders awaiting assignment to routes.

use crate::field::Field;
use crate::query::flag;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An order. Updates keep explicit nulls, like address book contacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    #[serde(default)]
    pub address_1: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_2: Field<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,

    #[serde(default)]
    pub cached_lat: f64,

    #[serde(default)]
    pub cached_lng: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curbside_lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curbside_lng: Option<f64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_alias: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_city: Field<String>,

    #[serde(default, rename = "EXT_FIELD_first_name", skip_serializing_if = "Field::is_absent")]
    pub first_name: Field<String>,

    #[serde(default, rename = "EXT_FIELD_last_name", skip_serializing_if = "Field::is_absent")]
    pub last_name: Field<String>,

    #[serde(default, rename = "EXT_FIELD_email", skip_serializing_if = "Field::is_absent")]
    pub email: Field<String>,

    #[serde(default, rename = "EXT_FIELD_phone", skip_serializing_if = "Field::is_absent")]
    pub phone: Field<String>,

    #[serde(default, rename = "EXT_FIELD_custom_data", skip_serializing_if = "Field::is_absent")]
    pub custom_data: Field<Value>,

    /// `YYYY-MM-DD`.
    #[serde(default, rename = "day_scheduled_for_YYMMDD", skip_serializing_if = "Field::is_absent")]
    pub day_scheduled_for: Field<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time_window_start: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time_window_end: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time_window_start_2: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time_window_end_2: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pending: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_accepted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_started: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_validated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
}

/// Query of the order endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderParameters {
    /// One order ID, or several comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub redirect: Option<bool>,

    #[serde(rename = "day_added_YYMMDD", skip_serializing_if = "Option::is_none")]
    pub day_added: Option<String>,

    #[serde(rename = "scheduled_for_YYMMDD", skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extension_fields_use_wire_prefix() {
        let order = Order {
            address_1: "Test Address1".to_string(),
            address_alias: Field::Value("Test AddressAlias".to_string()),
            first_name: Field::Value("Jane".to_string()),
            phone: Field::Null,
            cached_lat: 37.773972,
            cached_lng: -122.431297,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "address_1": "Test Address1",
                "address_alias": "Test AddressAlias",
                "EXT_FIELD_first_name": "Jane",
                "EXT_FIELD_phone": null,
                "cached_lat": 37.773972,
                "cached_lng": -122.431297
            })
        );
    }
}
