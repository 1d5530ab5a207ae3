//! Rebuilds logical journeys from raw vehicle drive records.
//!
//! A real trip is often split into several telemetry records by traffic
//! lights, errands or charging stops. This crate sorts those records, merges
//! consecutive ones separated by short or charging gaps, and derives battery,
//! autopilot and speed figures plus a plain-text summary for each journey.
//!
//! ```ignore
//! use drive_journeys::{analyze_latest_drive, EngineSettings};
//!
//! let settings = EngineSettings::default();
//! if let Some(analysis) = analyze_latest_drive(drives, &settings)? {
//!     println!("{}", analysis.summary);
//! }
//! ```
//!
//! Everything here is synchronous and pure; fetching drives is left to a
//! [`DriveSource`].

pub mod analysis;
pub mod error;
pub mod models;
pub mod segmentation;
pub mod settings;
pub mod source;
pub mod utils;

pub use analysis::{
    analyze_battery, analyze_drive, analyze_drives, analyze_drives_between, analyze_fsd,
    analyze_latest_drive, analyze_latest_from_source, generate_summary, BatteryConfig,
};
pub use error::{AnalysisError, Result};
pub use models::{
    BatteryConsumption, DriveAnalysis, DriveStop, FsdAnalysis, MergedDrive, RawDrive, StopType,
};
pub use segmentation::{aggregate_group, merge_drives, MergeConfig};
pub use settings::EngineSettings;
pub use source::{DriveSource, JsonDriveSource};
pub use utils::logging::init as init_logging;
