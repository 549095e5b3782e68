//! Account members, sessions, and member configuration.

use super::DeviceType;
use crate::field::Field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the user create/update calls.
///
/// `Field` members can be cleared by sending them as `Field::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberParametersV4 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_password: Option<String>,

    #[serde(skip_serializing_if = "Field::is_absent")]
    pub member_phone: Field<String>,

    #[serde(skip_serializing_if = "Field::is_absent")]
    pub member_zipcode: Field<String>,

    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_of_birth: Field<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(rename = "OWNER_MEMBER_ID", skip_serializing_if = "Option::is_none")]
    pub owner_member_id: Option<i64>,

    #[serde(rename = "HIDE_ROUTED_ADDRESSES", skip_serializing_if = "Option::is_none")]
    pub hide_routed_addresses: Option<String>,

    #[serde(rename = "HIDE_VISITED_ADDRESSES", skip_serializing_if = "Option::is_none")]
    pub hide_visited_addresses: Option<String>,

    #[serde(rename = "HIDE_NONFUTURE_ROUTES", skip_serializing_if = "Option::is_none")]
    pub hide_nonfuture_routes: Option<String>,

    #[serde(rename = "READONLY_USER", skip_serializing_if = "Option::is_none")]
    pub readonly_user: Option<String>,

    #[serde(rename = "SHOW_ALL_DRIVERS", skip_serializing_if = "Option::is_none")]
    pub show_all_drivers: Option<String>,

    #[serde(rename = "SHOW_ALL_VEHICLES", skip_serializing_if = "Option::is_none")]
    pub show_all_vehicles: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_units: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_reg_state_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_reg_country_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
}

/// A member as returned by the user endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberResponseV4 {
    #[serde(default)]
    pub member_id: i64,

    #[serde(default)]
    pub member_email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub member_phone: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub member_zipcode: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date_of_birth: Field<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, rename = "OWNER_MEMBER_ID", skip_serializing_if = "Option::is_none")]
    pub owner_member_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_units: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,

    #[serde(default, rename = "READONLY_USER", skip_serializing_if = "Option::is_none")]
    pub readonly_user: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
}

/// Form fields of the session-oriented member actions: authentication,
/// registration, and session validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberParameters {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Registration repeats the password in a second field.
    pub password_confirmation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub industry: Option<String>,
    pub device_type: Option<DeviceType>,
    pub accept_terms: bool,
    pub format: Option<String>,
    pub plan: Option<String>,
    pub member_type: Option<i32>,
    pub session_guid: Option<String>,
    pub member_id: Option<i64>,
}

/// Session details returned by the authentication and session actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    #[serde(default)]
    pub status: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocoding_service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_ttl: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geofence_polygon_shape: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geofence_polygon_size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geofence_time_onsite_trigger_secs: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geofence_minimum_trigger_speed: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subscription_past_due: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited_departed_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_press_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stops_per_route: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_routes: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes_planned: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_units: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

/// A member configuration key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberConfigurationParameters {
    #[serde(default)]
    pub config_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_value: Option<String>,
}

/// Result of a configuration create/update/remove call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberConfigurationResponse {
    #[serde(default)]
    pub result: String,

    #[serde(default)]
    pub affected: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberConfigurationData {
    #[serde(default)]
    pub member_id: i64,

    #[serde(default)]
    pub config_key: String,

    #[serde(default)]
    pub config_value: String,
}

/// Result of a configuration lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberConfigurationDataResponse {
    #[serde(default)]
    pub result: String,

    #[serde(default)]
    pub data: Vec<MemberConfigurationData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_can_clear_phone() {
        let params = MemberParametersV4 {
            member_id: Some(45844),
            member_phone: Field::Null,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "member_id": 45844, "member_phone": null })
        );
    }

    #[test]
    fn flags_use_upper_case_wire_names() {
        let params = MemberParametersV4 {
            hide_routed_addresses: Some("FALSE".to_string()),
            owner_member_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "HIDE_ROUTED_ADDRESSES": "FALSE", "OWNER_MEMBER_ID": 1 })
        );
    }
}
