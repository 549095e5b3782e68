//! Routes: the solved output of an optimization problem.

use super::{
    Address, AlgorithmType, DeviceType, DistanceUnit, Optimize, RoutePathOutput,
    TrackingHistory, TravelMode,
};
use crate::query::{bit, flag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settings shared by optimization problems and the routes they produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_upload: Option<bool>,

    /// Round trip: the route returns to its first address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rt: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_optimization: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,

    /// Unix timestamp of the route date, at midnight UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_date: Option<i64>,

    /// Start time, in seconds after `route_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimize: Option<Optimize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<TravelMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_type: Option<AlgorithmType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_route: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_max_duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_max_distance_mi: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_last: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_quality: Option<u8>,
}

/// Query and body parameters of the route endpoint.
///
/// Every field except `parameters` and `addresses` travels in the query
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteParametersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub directions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_path_output: Option<RoutePathOutput>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub device_tracking_history: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub original: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub notes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub reoptimize: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub recompute_directions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub redirect: Option<bool>,

    /// Response format of the sharing endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,

    #[serde(skip)]
    pub parameters: Option<RouteParameters>,

    #[serde(skip)]
    pub addresses: Option<Vec<Address>>,
}

/// A route as returned by the route endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataObjectRoute {
    #[serde(default)]
    pub route_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_problem_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_distance: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_revenue: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_revenue_per_distance_unit: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpg: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_duration_sec: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<RouteParameters>,

    #[serde(default)]
    pub addresses: Vec<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_history: Option<Vec<TrackingHistory>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directions: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_problem_id: Option<String>,
}

/// Query of the route merge action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeRoutesQuery {
    pub route_ids: Vec<String>,
    pub depot_address: String,
    pub remove_origin: bool,
    pub depot_lat: f64,
    pub depot_lng: f64,
}

/// Query of the resequence/reoptimize action.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResequenceReoptimizeQuery {
    pub route_id: String,

    #[serde(serialize_with = "bit")]
    pub disable_optimization: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize: Option<Optimize>,
}
