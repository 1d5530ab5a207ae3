use crate::models::{FsdAnalysis, MergedDrive, RawDrive};

pub const NO_AUTOPILOT_NOTE: &str =
    "autonomous-driving data not available or no autonomous driving detected.";

/// Autopilot share of a journey.
///
/// `available` means at least one constituent actually reported an
/// autopilot distance, or some autopilot miles were recorded. Records that
/// omit the field entirely leave it false.
pub fn analyze_fsd(drive: &MergedDrive, constituents: &[RawDrive]) -> FsdAnalysis {
    let reported = constituents.iter().any(|d| d.autopilot_distance.is_some());
    let available = drive.autopilot_distance > 0.0 || reported;

    let note = if drive.autopilot_distance == 0.0 {
        Some(NO_AUTOPILOT_NOTE.to_string())
    } else {
        None
    };

    FsdAnalysis {
        autopilot_miles: drive.autopilot_distance,
        autopilot_percentage: drive.autopilot_percentage,
        available,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::{aggregate_group, MergeConfig};
    use chrono::{TimeZone, Utc};

    fn drive(id: &str, start: i64, autopilot: Option<f64>) -> RawDrive {
        RawDrive {
            id: id.to_string(),
            start_time: Utc.timestamp_opt(start, 0).unwrap(),
            end_time: Utc.timestamp_opt(start + 1200, 0).unwrap(),
            start_location: "A".to_string(),
            end_location: "B".to_string(),
            start_battery: 80.0,
            end_battery: 75.0,
            distance: 20.0,
            average_speed: None,
            max_speed: None,
            autopilot_distance: autopilot,
        }
    }

    fn analyze(drives: &[RawDrive]) -> FsdAnalysis {
        let merged = aggregate_group(drives, &MergeConfig::default()).unwrap();
        analyze_fsd(&merged, drives)
    }

    #[test]
    fn recorded_autopilot_has_no_note() {
        let result = analyze(&[drive("a", 0, Some(15.0))]);
        assert!(result.available);
        assert_eq!(result.autopilot_miles, 15.0);
        assert_eq!(result.autopilot_percentage, 75.0);
        assert_eq!(result.note, None);
    }

    #[test]
    fn reported_zero_is_available_with_note() {
        let result = analyze(&[drive("a", 0, Some(0.0))]);
        assert!(result.available);
        assert_eq!(result.note.as_deref(), Some(NO_AUTOPILOT_NOTE));
    }

    #[test]
    fn missing_field_is_unavailable() {
        let result = analyze(&[drive("a", 0, None), drive("b", 1300, None)]);
        assert!(!result.available);
        assert_eq!(result.autopilot_miles, 0.0);
        assert_eq!(result.note.as_deref(), Some(NO_AUTOPILOT_NOTE));
    }

    #[test]
    fn partial_reporting_counts() {
        let result = analyze(&[drive("a", 0, None), drive("b", 1300, Some(10.0))]);
        assert!(result.available);
        assert_eq!(result.autopilot_percentage, 25.0);
    }
}
