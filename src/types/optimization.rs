//! Optimization problems and hybrid (scheduled) optimizations.

use super::{Address, DataObjectRoute, Links, OptimizationState, RouteParameters, TrackingHistory};
use crate::query::flag;
use serde::{Deserialize, Serialize};

/// Parameters of the optimization endpoint.
///
/// The identifier and flags go to the query string; `parameters` and
/// `addresses` form the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptimizationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization_problem_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub reoptimize: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub show_directions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "flag::serialize")]
    pub redirect: Option<bool>,

    #[serde(skip)]
    pub parameters: Option<RouteParameters>,

    #[serde(skip)]
    pub addresses: Option<Vec<Address>>,
}

/// JSON body carrying route settings and stops.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProblemBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<&'a RouteParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<&'a [Address]>,
}

impl<'a> ProblemBody<'a> {
    pub fn is_empty(&self) -> bool {
        self.parameters.is_none() && self.addresses.is_none()
    }
}

impl OptimizationParameters {
    pub(crate) fn body(&self) -> ProblemBody<'_> {
        ProblemBody {
            parameters: self.parameters.as_ref(),
            addresses: self.addresses.as_deref(),
        }
    }
}

/// An optimization problem as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataObject {
    #[serde(default)]
    pub optimization_problem_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OptimizationState>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_errors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_to_background: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<RouteParameters>,

    #[serde(default)]
    pub addresses: Vec<Address>,

    #[serde(default)]
    pub routes: Vec<DataObjectRoute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_history: Option<Vec<TrackingHistory>>,
}

/// Query of the hybrid optimization endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HybridOptimizationParameters {
    /// Target date, `YYYY-MM-DD`.
    pub target_date_string: String,

    pub timezone_offset_minutes: i32,
}

/// Body of the hybrid depot replacement call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HybridDepotParameters {
    pub optimization_problem_id: String,

    pub delete_old_depots: bool,

    pub new_depots: Vec<Address>,
}
