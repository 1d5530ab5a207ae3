use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One continuous period of motion as reported by the telemetry provider.
///
/// Records are trusted as given: `end_time >= start_time`, `distance >= 0`
/// and `autopilot_distance <= distance` are assumed, not checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawDrive {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub start_location: String,
    pub end_location: String,
    /// Battery percentage (0-100) when the drive started.
    pub start_battery: f64,
    pub end_battery: f64,
    /// Miles.
    pub distance: f64,
    #[serde(default)]
    pub average_speed: Option<f64>,
    #[serde(default)]
    pub max_speed: Option<f64>,
    #[serde(default)]
    pub autopilot_distance: Option<f64>,
}

impl RawDrive {
    pub fn duration_minutes(&self) -> f64 {
        minutes_between(self.start_time, self.end_time)
    }

    /// Minutes between the end of `self` and the start of `next`.
    pub fn gap_minutes_to(&self, next: &RawDrive) -> f64 {
        minutes_between(self.end_time, next.start_time)
    }

    /// Battery gained between the end of `self` and the start of `next`.
    /// Positive when the car was charged while parked.
    pub fn battery_delta_to(&self, next: &RawDrive) -> f64 {
        next.start_battery - self.end_battery
    }
}

/// Elapsed minutes from `from` to `to`, keeping millisecond precision.
/// Negative when `to` is earlier.
pub fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 60_000.0
}
