//! Fleet vehicles.

use serde::{Deserialize, Serialize};

/// Body of the vehicle create/update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VehicleV4Parameters {
    /// Selects the vehicle for updates and deletes; never sent in the body.
    #[serde(skip)]
    pub vehicle_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_vin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_reg_state_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_reg_country_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_license_plate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model_year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_year_acquired: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_cost_new: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_new: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_operational: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_telematics_vehicle_id: Option<String>,
}

/// A vehicle as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleV4Response {
    #[serde(default)]
    pub vehicle_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_vin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_added: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_license_plate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_make: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_model_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_operational: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_telematics_vehicle_id: Option<String>,
}

/// One page of the vehicle list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehiclesPaginated {
    #[serde(default)]
    pub current_page: u32,

    #[serde(default)]
    pub data: Vec<VehicleV4Response>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_page_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,

    #[serde(default)]
    pub last_page: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default)]
    pub per_page: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,

    #[serde(default)]
    pub total: u64,
}

/// Query of the vehicle list and lookup calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VehicleParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}
