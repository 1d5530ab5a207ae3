use serde::{Deserialize, Serialize};

/// Thresholds that decide whether two consecutive drives belong to the same
/// journey. Stop classification uses the same values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    /// Gaps strictly shorter than this are short stops.
    pub max_gap_minutes: f64,

    /// Battery gained during a gap, in percentage points, above which the gap
    /// counts as a charging stop regardless of its length.
    pub charging_battery_delta: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_gap_minutes: 7.0,
            charging_battery_delta: 5.0,
        }
    }
}
