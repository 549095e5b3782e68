//! Enumerations shared by route and optimization parameters.

use serde::{Deserialize, Serialize};

/// Optimization algorithm, sent as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AlgorithmType {
    /// Single driver, single route.
    Tsp,
    /// Single depot, multiple drivers, no constraints.
    Vrp,
    /// Single depot, multiple drivers, capacitated, time windows.
    CvrpTwSd,
    /// Multiple depots, multiple drivers, capacitated, time windows.
    CvrpTwMd,
    /// Single depot, single driver, time windows.
    TspTw,
    /// Single depot, single driver, time windows, continuous optimization.
    TspTwCr,
    /// Balanced vehicle capacity.
    Bbcvrp,
    /// No optimization, addresses kept in the submitted order.
    None,
    /// Legacy distributed solver.
    LegacyDistributed,
}

impl From<AlgorithmType> for u8 {
    fn from(value: AlgorithmType) -> Self {
        match value {
            AlgorithmType::Tsp => 1,
            AlgorithmType::Vrp => 2,
            AlgorithmType::CvrpTwSd => 3,
            AlgorithmType::CvrpTwMd => 4,
            AlgorithmType::TspTw => 5,
            AlgorithmType::TspTwCr => 6,
            AlgorithmType::Bbcvrp => 7,
            AlgorithmType::None => 100,
            AlgorithmType::LegacyDistributed => 101,
        }
    }
}

impl TryFrom<u8> for AlgorithmType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => AlgorithmType::Tsp,
            2 => AlgorithmType::Vrp,
            3 => AlgorithmType::CvrpTwSd,
            4 => AlgorithmType::CvrpTwMd,
            5 => AlgorithmType::TspTw,
            6 => AlgorithmType::TspTwCr,
            7 => AlgorithmType::Bbcvrp,
            100 => AlgorithmType::None,
            101 => AlgorithmType::LegacyDistributed,
            other => return Err(format!("unknown algorithm type {}", other)),
        })
    }
}

/// Lifecycle state of an optimization problem, sent as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OptimizationState {
    Initial,
    MatrixProcessing,
    Optimizing,
    Optimized,
    Failed,
    ComputingDirections,
}

impl From<OptimizationState> for u8 {
    fn from(value: OptimizationState) -> Self {
        match value {
            OptimizationState::Initial => 1,
            OptimizationState::MatrixProcessing => 2,
            OptimizationState::Optimizing => 3,
            OptimizationState::Optimized => 4,
            OptimizationState::Failed => 5,
            OptimizationState::ComputingDirections => 6,
        }
    }
}

impl TryFrom<u8> for OptimizationState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        Ok(match value {
            1 => OptimizationState::Initial,
            2 => OptimizationState::MatrixProcessing,
            3 => OptimizationState::Optimizing,
            4 => OptimizationState::Optimized,
            5 => OptimizationState::Failed,
            6 => OptimizationState::ComputingDirections,
            other => return Err(format!("unknown optimization state {}", other)),
        })
    }
}

/// What the optimizer minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Optimize {
    Distance,
    Time,
    #[serde(rename = "timeWithTraffic")]
    TimeWithTraffic,
}

impl Optimize {
    /// The wire value, for endpoints that take it as a query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Optimize::Distance => "Distance",
            Optimize::Time => "Time",
            Optimize::TimeWithTraffic => "timeWithTraffic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "km")]
    Kilometers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Web,
    #[serde(rename = "iphone")]
    IPhone,
    #[serde(rename = "ipad")]
    IPad,
    AndroidPhone,
    AndroidTablet,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Web => "web",
            DeviceType::IPhone => "iphone",
            DeviceType::IPad => "ipad",
            DeviceType::AndroidPhone => "android_phone",
            DeviceType::AndroidTablet => "android_tablet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelMode {
    Driving,
    Walking,
    Trucking,
}

/// Shape of a territory or avoidance zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerritoryType {
    Circle,
    Poly,
    Rect,
}

/// Whether route responses include the driving path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutePathOutput {
    None,
    Points,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_enums_use_service_codes() {
        assert_eq!(serde_json::to_string(&AlgorithmType::CvrpTwSd).unwrap(), "3");
        assert_eq!(serde_json::to_string(&AlgorithmType::None).unwrap(), "100");
        let state: OptimizationState = serde_json::from_str("4").unwrap();
        assert_eq!(state, OptimizationState::Optimized);
        assert!(serde_json::from_str::<AlgorithmType>("42").is_err());
    }

    #[test]
    fn string_enums_use_wire_names() {
        assert_eq!(serde_json::to_string(&Optimize::TimeWithTraffic).unwrap(), "\"timeWithTraffic\"");
        assert_eq!(serde_json::to_string(&DistanceUnit::Miles).unwrap(), "\"mi\"");
        assert_eq!(serde_json::to_string(&DeviceType::AndroidPhone).unwrap(), "\"android_phone\"");
        assert_eq!(serde_json::to_string(&DeviceType::IPhone).unwrap(), "\"iphone\"");
        assert_eq!(serde_json::to_string(&TerritoryType::Poly).unwrap(), "\"poly\"");
    }
}
