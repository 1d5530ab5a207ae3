//! Analysis results handed back to the query layer.

use serde::{Deserialize, Serialize};

use super::MergedDrive;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatteryConsumption {
    pub percentage_used: f64,
    pub estimated_kwh_used: f64,
    /// Only present when both distance and energy used are positive.
    pub efficiency_miles_per_kwh: Option<f64>,
    /// The journey ended with more charge than it started with.
    pub net_charging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FsdAnalysis {
    pub autopilot_miles: f64,
    pub autopilot_percentage: f64,
    pub available: bool,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveAnalysis {
    pub drive: MergedDrive,
    pub battery: BatteryConsumption,
    pub fsd: FsdAnalysis,
    pub summary: String,
}
