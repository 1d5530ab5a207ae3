use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Short,
    Charging,
    Excluded,
}

impl StopType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopType::Short => "short",
            StopType::Charging => "charging",
            StopType::Excluded => "excluded",
        }
    }
}

/// Gap between two adjacent drives inside one journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveStop {
    /// Where the earlier drive ended.
    pub location: String,
    pub duration_minutes: f64,
    pub stop_type: StopType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// One logical journey built from one or more raw drives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MergedDrive {
    pub id: String,
    /// Constituent drive ids in start-time order.
    pub drive_ids: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub start_location: String,
    pub end_location: String,
    pub start_battery: f64,
    pub end_battery: f64,
    pub total_distance: f64,
    pub total_duration_minutes: f64,
    pub driving_duration_minutes: f64,
    pub stops: Vec<DriveStop>,
    pub autopilot_distance: f64,
    pub autopilot_percentage: f64,
    /// Start battery minus end battery. Negative when the journey ended with
    /// more charge than it started with.
    pub energy_consumed: f64,
    pub average_speed: f64,
    pub max_speed: f64,
}

impl MergedDrive {
    pub fn drive_count(&self) -> usize {
        self.drive_ids.len()
    }

    pub fn stop_duration_minutes(&self) -> f64 {
        self.total_duration_minutes - self.driving_duration_minutes
    }

    pub fn stop_count(&self, stop_type: StopType) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.stop_type == stop_type)
            .count()
    }
}
