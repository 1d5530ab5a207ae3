pub mod analysis;
pub mod drive;
pub mod merged;

pub use analysis::{BatteryConsumption, DriveAnalysis, FsdAnalysis};
pub use drive::{minutes_between, RawDrive};
pub use merged::{DriveStop, MergedDrive, StopType};
