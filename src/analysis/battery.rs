use serde::{Deserialize, Serialize};

use crate::models::{BatteryConsumption, MergedDrive};
use crate::utils::format::round2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BatteryConfig {
    /// Usable pack energy used to turn a percentage into kWh.
    pub pack_capacity_kwh: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            pack_capacity_kwh: 75.0,
        }
    }
}

/// Estimate the energy a journey used from its battery percentage delta.
pub fn analyze_battery(drive: &MergedDrive, config: &BatteryConfig) -> BatteryConsumption {
    let percentage_used = round2(drive.energy_consumed);
    let estimated_kwh_used = round2(percentage_used / 100.0 * config.pack_capacity_kwh);

    let efficiency_miles_per_kwh = if drive.total_distance > 0.0 && estimated_kwh_used > 0.0 {
        Some(round2(drive.total_distance / estimated_kwh_used))
    } else {
        None
    };

    BatteryConsumption {
        percentage_used,
        estimated_kwh_used,
        efficiency_miles_per_kwh,
        net_charging: percentage_used < 0.0,
    }
}
