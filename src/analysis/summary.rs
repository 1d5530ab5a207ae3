use crate::models::{BatteryConsumption, FsdAnalysis, MergedDrive, StopType};
use crate::utils::format::{format_duration, pluralize};

/// Stop time at or under this is not worth a line.
const MIN_REPORTED_STOP_MINUTES: f64 = 1.0;

/// Render a journey as a short multi-line report.
pub fn generate_summary(
    drive: &MergedDrive,
    battery: &BatteryConsumption,
    fsd: &FsdAnalysis,
) -> String {
    let mut lines = vec![
        format!("Route: {} → {}", drive.start_location, drive.end_location),
        format!("Total time: {}", format_duration(drive.total_duration_minutes)),
        format!(
            "Driving time: {}",
            format_duration(drive.driving_duration_minutes)
        ),
    ];

    let stop_minutes = drive.stop_duration_minutes();
    if stop_minutes > MIN_REPORTED_STOP_MINUTES {
        let mut line = format!("Stop time: {}", format_duration(stop_minutes));
        if let Some(breakdown) = stop_breakdown(drive) {
            line.push_str(&format!(" ({})", breakdown));
        }
        lines.push(line);
    }

    lines.push(format!("Distance: {:.2} miles", drive.total_distance));
    lines.push(format!(
        "Speed: avg {:.1} mph, max {:.1} mph",
        drive.average_speed, drive.max_speed
    ));

    if battery.net_charging {
        lines.push(format!(
            "Battery: gained {:.2}% (~{:.2} kWh)",
            -battery.percentage_used,
            -battery.estimated_kwh_used
        ));
    } else {
        lines.push(format!(
            "Battery: {:.2}% used (~{:.2} kWh)",
            battery.percentage_used, battery.estimated_kwh_used
        ));
    }

    if let Some(efficiency) = battery.efficiency_miles_per_kwh {
        lines.push(format!("Efficiency: {:.2} mi/kWh", efficiency));
    }

    match (&fsd.note, fsd.available && fsd.autopilot_miles > 0.0) {
        (_, true) => lines.push(format!(
            "Autopilot: {:.2} miles ({:.2}%)",
            fsd.autopilot_miles, fsd.autopilot_percentage
        )),
        (Some(note), false) => lines.push(format!("Autopilot: {}", note)),
        (None, false) => {}
    }

    lines.join("\n")
}

/// `1 charging stop, 2 short stops`, or `None` for a journey without stops.
fn stop_breakdown(drive: &MergedDrive) -> Option<String> {
    if drive.stops.is_empty() {
        return None;
    }

    let charging = drive.stop_count(StopType::Charging);
    let short = drive.stop_count(StopType::Short);

    let mut parts = Vec::new();
    if charging > 0 {
        parts.push(pluralize(charging, "charging stop"));
    }
    if short > 0 {
        parts.push(pluralize(short, "short stop"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
