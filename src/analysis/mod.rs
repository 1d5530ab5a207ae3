pub mod battery;
pub mod fsd;
pub mod summary;

pub use battery::{analyze_battery, BatteryConfig};
pub use fsd::analyze_fsd;
pub use summary::generate_summary;

use chrono::{DateTime, Utc};

use crate::error::{AnalysisError, Result};
use crate::models::{DriveAnalysis, MergedDrive, RawDrive};
use crate::segmentation::{aggregate_group, group_drives};
use crate::settings::EngineSettings;
use crate::source::DriveSource;
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Bundle a merged journey with its battery, autopilot and text analysis.
pub fn analyze_drive(
    drive: MergedDrive,
    constituents: &[RawDrive],
    settings: &EngineSettings,
) -> DriveAnalysis {
    let battery = analyze_battery(&drive, &settings.battery);
    let fsd = analyze_fsd(&drive, constituents);
    let summary = generate_summary(&drive, &battery, &fsd);

    DriveAnalysis {
        drive,
        battery,
        fsd,
        summary,
    }
}

/// Analyse every journey in `drives`, oldest first.
pub fn analyze_drives(
    drives: Vec<RawDrive>,
    settings: &EngineSettings,
) -> Result<Vec<DriveAnalysis>> {
    group_drives(drives, &settings.merge)
        .iter()
        .map(|group| -> Result<DriveAnalysis> {
            let merged = aggregate_group(group, &settings.merge)?;
            Ok(analyze_drive(merged, group, settings))
        })
        .collect()
}

/// Analyse the most recent journey, or `None` when there are no drives.
pub fn analyze_latest_drive(
    drives: Vec<RawDrive>,
    settings: &EngineSettings,
) -> Result<Option<DriveAnalysis>> {
    let drive_count = drives.len();
    let Some(latest) = group_drives(drives, &settings.merge).pop() else {
        log_debug!("No drives to analyse");
        return Ok(None);
    };

    let merged = aggregate_group(&latest, &settings.merge)?;
    log_info!(
        "Latest journey {} covers {} of {} drives",
        merged.id,
        merged.drive_count(),
        drive_count
    );

    Ok(Some(analyze_drive(merged, &latest, settings)))
}

/// Journeys that started within `[from, to)`.
///
/// Drives are merged before the window is applied, so a journey that began
/// inside the window keeps the legs that ran past its end.
pub fn analyze_drives_between(
    drives: Vec<RawDrive>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    settings: &EngineSettings,
) -> Result<Vec<DriveAnalysis>> {
    if from >= to {
        return Err(AnalysisError::invalid_argument(format!(
            "empty time window: {} is not before {}",
            from, to
        )));
    }

    Ok(analyze_drives(drives, settings)?
        .into_iter()
        .filter(|analysis| analysis.drive.start_time >= from && analysis.drive.start_time < to)
        .collect())
}

/// Fetch drives from `source` and analyse the most recent journey.
pub fn analyze_latest_from_source<S: DriveSource + ?Sized>(
    source: &S,
    settings: &EngineSettings,
) -> Result<Option<DriveAnalysis>> {
    let drives = source.fetch_drives().map_err(AnalysisError::Fetch)?;
    analyze_latest_drive(drives, settings)
}
