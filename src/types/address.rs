//! Route destinations and the parameters of the address endpoint.

use super::note::AddressNote;
use crate::query::flag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stop on a route or in an optimization problem.
///
/// Coordinates and the address string are always sent; every other field is
/// sent only when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, rename = "address")]
    pub address_string: String,

    #[serde(default, rename = "lat")]
    pub latitude: f64,

    #[serde(default, rename = "lng")]
    pub longitude: f64,

    #[serde(default, rename = "curbside_lat", skip_serializing_if = "Option::is_none")]
    pub curbside_latitude: Option<f64>,

    #[serde(default, rename = "curbside_lng", skip_serializing_if = "Option::is_none")]
    pub curbside_longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_depot: Option<bool>,

    /// Service time at the stop, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,

    /// Seconds since midnight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window_start: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window_end: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window_start_2: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window_end_2: Option<u32>,

    /// Assigned by the service once the address belongs to a route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_destination_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_no: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_problem_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cube: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visited: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_departed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_last_visited: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_last_departed: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocoded: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<AddressNote>>,
}

impl Address {
    /// Creates an address from a display string and coordinates.
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address_string: address.into(),
            latitude,
            longitude,
            ..Default::default()
        }
    }

    /// The default way of recognizing a submitted address among the
    /// addresses the service echoes back: same display string, same
    /// coordinates, and a destination ID already assigned.
    pub fn matches_submitted(&self, submitted: &Address) -> bool {
        self.route_destination_id.is_some()
            && self.address_string == submitted.address_string
            && self.latitude == submitted.latitude
            && self.longitude == submitted.longitude
    }
}

/// Query parameters of the address endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_destination_id: Option<i64>,

    /// Used by the visited/departed endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub notes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub is_visited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub is_departed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
}
