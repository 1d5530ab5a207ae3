use crate::error::{AnalysisError, Result};
use crate::log_warn;
use crate::models::{minutes_between, DriveStop, MergedDrive, RawDrive, StopType};
use crate::segmentation::config::MergeConfig;
use crate::utils::format::round2;

const ENABLE_LOGS: bool = true;

/// Build one journey from a non-empty group of drives already in start-time
/// order.
pub fn aggregate_group(drives: &[RawDrive], config: &MergeConfig) -> Result<MergedDrive> {
    let (first, last) = match (drives.first(), drives.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(AnalysisError::invalid_argument(
                "cannot aggregate an empty drive group",
            ))
        }
    };

    let total_distance: f64 = drives.iter().map(|d| d.distance).sum();
    let total_duration_minutes = minutes_between(first.start_time, last.end_time);
    let driving_duration_minutes: f64 = drives.iter().map(RawDrive::duration_minutes).sum();

    let average_speed = if driving_duration_minutes > 0.0 {
        total_distance / (driving_duration_minutes / 60.0)
    } else {
        0.0
    };

    let max_speed = drives
        .iter()
        .filter_map(|d| d.max_speed)
        .fold(0.0_f64, f64::max);

    let autopilot_distance: f64 = drives
        .iter()
        .map(|d| d.autopilot_distance.unwrap_or(0.0))
        .sum();
    let autopilot_percentage = if total_distance > 0.0 {
        autopilot_distance / total_distance * 100.0
    } else {
        0.0
    };

    let drive_ids: Vec<String> = drives.iter().map(|d| d.id.clone()).collect();

    Ok(MergedDrive {
        id: merged_id(&drive_ids),
        drive_ids,
        start_time: first.start_time,
        end_time: last.end_time,
        start_location: first.start_location.clone(),
        end_location: last.end_location.clone(),
        start_battery: first.start_battery,
        end_battery: last.end_battery,
        total_distance: round2(total_distance),
        total_duration_minutes: round2(total_duration_minutes),
        driving_duration_minutes: round2(driving_duration_minutes),
        stops: detect_stops(drives, config),
        autopilot_distance: round2(autopilot_distance),
        autopilot_percentage: round2(autopilot_percentage),
        energy_consumed: round2(first.start_battery - last.end_battery),
        average_speed: round2(average_speed),
        max_speed: round2(max_speed),
    })
}

/// One stop per adjacent pair of drives.
pub fn detect_stops(drives: &[RawDrive], config: &MergeConfig) -> Vec<DriveStop> {
    drives
        .windows(2)
        .map(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let gap_minutes = prev.gap_minutes_to(next);
            let stop_type = classify_stop(gap_minutes, prev.battery_delta_to(next), config);

            if stop_type == StopType::Excluded {
                log_warn!(
                    "Stop between drives {} and {} classified {} ({:.1} min gap)",
                    prev.id,
                    next.id,
                    stop_type.as_str(),
                    gap_minutes
                );
            }

            DriveStop {
                location: prev.end_location.clone(),
                duration_minutes: round2(gap_minutes),
                stop_type,
                start_time: prev.end_time,
                end_time: next.start_time,
            }
        })
        .collect()
}

/// Charging wins over a short gap: a car that gained charge in three minutes
/// still stopped to charge.
pub fn classify_stop(gap_minutes: f64, battery_delta: f64, config: &MergeConfig) -> StopType {
    if battery_delta > config.charging_battery_delta {
        StopType::Charging
    } else if gap_minutes < config.max_gap_minutes {
        StopType::Short
    } else {
        StopType::Excluded
    }
}

fn merged_id(drive_ids: &[String]) -> String {
    match drive_ids {
        [only] => only.clone(),
        [first, .., last] => format!("merged_{}_{}", first, last),
        [] => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn drive(id: &str, start: i64, end: i64, distance: f64, battery: (f64, f64)) -> RawDrive {
        RawDrive {
            id: id.to_string(),
            start_time: Utc.timestamp_opt(start, 0).unwrap(),
            end_time: Utc.timestamp_opt(end, 0).unwrap(),
            start_location: format!("{}-start", id),
            end_location: format!("{}-end", id),
            start_battery: battery.0,
            end_battery: battery.1,
            distance,
            average_speed: None,
            max_speed: None,
            autopilot_distance: None,
        }
    }

    #[test]
    fn empty_group_is_invalid() {
        let err = aggregate_group(&[], &MergeConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidArgument(_)));
    }

    #[test]
    fn single_drive_has_no_stops() {
        let d = drive("a", 0, 1800, 25.0, (80.0, 72.0));
        let merged = aggregate_group(&[d], &MergeConfig::default()).unwrap();

        assert_eq!(merged.id, "a");
        assert!(merged.stops.is_empty());
        assert_eq!(merged.total_duration_minutes, 30.0);
        assert_eq!(merged.driving_duration_minutes, 30.0);
        assert_eq!(merged.average_speed, 50.0);
        assert_eq!(merged.energy_consumed, 8.0);
    }

    #[test]
    fn short_stop_journey() {
        let drives = vec![
            drive("1", 0, 600, 10.0, (100.0, 95.0)),
            drive("2", 900, 1500, 8.0, (95.0, 90.0)),
        ];
        let merged = aggregate_group(&drives, &MergeConfig::default()).unwrap();

        assert_eq!(merged.id, "merged_1_2");
        assert_eq!(merged.drive_ids, vec!["1", "2"]);
        assert_eq!(merged.total_distance, 18.0);
        assert_eq!(merged.driving_duration_minutes, 20.0);
        assert_eq!(merged.total_duration_minutes, 25.0);
        assert_eq!(merged.average_speed, 54.0);
        assert_eq!(merged.energy_consumed, 10.0);
        assert_eq!(merged.start_location, "1-start");
        assert_eq!(merged.end_location, "2-end");

        assert_eq!(merged.stops.len(), 1);
        let stop = &merged.stops[0];
        assert_eq!(stop.stop_type, StopType::Short);
        assert_eq!(stop.duration_minutes, 5.0);
        assert_eq!(stop.location, "1-end");
        assert_eq!(stop.start_time, drives[0].end_time);
        assert_eq!(stop.end_time, drives[1].start_time);
    }

    #[test]
    fn speed_and_autopilot_totals() {
        let mut a = drive("a", 0, 3600, 60.0, (90.0, 70.0));
        a.max_speed = Some(75.5);
        a.autopilot_distance = Some(30.0);
        let mut b = drive("b", 3700, 7300, 40.0, (70.0, 55.0));
        b.max_speed = Some(80.25);

        let merged = aggregate_group(&[a, b], &MergeConfig::default()).unwrap();

        assert_eq!(merged.max_speed, 80.25);
        assert_eq!(merged.autopilot_distance, 30.0);
        assert_eq!(merged.autopilot_percentage, 30.0);
    }

    #[test]
    fn zero_duration_and_distance_do_not_divide() {
        let d = drive("z", 100, 100, 0.0, (50.0, 50.0));
        let merged = aggregate_group(&[d], &MergeConfig::default()).unwrap();

        assert_eq!(merged.average_speed, 0.0);
        assert_eq!(merged.autopilot_percentage, 0.0);
        assert_eq!(merged.max_speed, 0.0);
    }

    #[test]
    fn net_charging_keeps_negative_energy() {
        let drives = vec![
            drive("1", 0, 600, 5.0, (40.0, 38.0)),
            drive("2", 3000, 3600, 5.0, (80.0, 78.0)),
        ];
        let merged = aggregate_group(&drives, &MergeConfig::default()).unwrap();

        assert_eq!(merged.energy_consumed, -38.0);
        assert_eq!(merged.stops[0].stop_type, StopType::Charging);
    }

    #[test]
    fn classify_prefers_charging() {
        let config = MergeConfig::default();
        assert_eq!(classify_stop(3.0, 10.0, &config), StopType::Charging);
        assert_eq!(classify_stop(30.0, 5.5, &config), StopType::Charging);
        assert_eq!(classify_stop(6.99, 5.0, &config), StopType::Short);
        assert_eq!(classify_stop(7.0, 5.0, &config), StopType::Excluded);
    }

    #[test]
    fn durations_keep_subsecond_precision() {
        // ten 59.9 s drives separated by 1.1 s pauses
        let drives: Vec<RawDrive> = (0..10)
            .map(|i| {
                let start_ms = i * 61_000;
                let mut d = drive(&format!("d{}", i), 0, 0, 1.0, (90.0, 90.0));
                d.start_time = Utc.timestamp_millis_opt(start_ms).unwrap();
                d.end_time = Utc.timestamp_millis_opt(start_ms + 59_900).unwrap();
                d
            })
            .collect();

        let merged = aggregate_group(&drives, &MergeConfig::default()).unwrap();

        assert_eq!(merged.driving_duration_minutes, 9.98);
        assert_eq!(merged.total_duration_minutes, 10.15);
        assert_eq!(merged.average_speed, 60.1);
        assert_eq!(merged.stops.len(), 9);
        assert!(merged
            .stops
            .iter()
            .all(|stop| stop.duration_minutes == 0.02 && stop.stop_type == StopType::Short));
    }

    #[test]
    fn long_gap_without_charge_is_excluded() {
        let drives = vec![
            drive("1", 0, 600, 5.0, (80.0, 78.0)),
            drive("2", 1200, 1800, 5.0, (80.0, 76.0)),
        ];
        let merged = aggregate_group(&drives, &MergeConfig::default()).unwrap();

        assert_eq!(merged.stops.len(), 1);
        let stop = &merged.stops[0];
        assert_eq!(stop.stop_type, StopType::Excluded);
        assert_eq!(stop.stop_type.as_str(), "excluded");
        assert_eq!(stop.duration_minutes, 10.0);
        assert_eq!(stop.location, "1-end");
        assert_eq!(stop.start_time, drives[0].end_time);
        assert_eq!(stop.end_time, drives[1].start_time);
        assert_eq!(merged.total_duration_minutes, 30.0);
        assert_eq!(merged.driving_duration_minutes, 20.0);
    }
}
