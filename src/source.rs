//! Where raw drives come from.
//!
//! The engine never talks to the telemetry provider itself. A `DriveSource`
//! hands over drives that are already fetched and deserialized; anything that
//! goes wrong on the way is reported as `AnalysisError::Fetch`.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::models::RawDrive;

pub trait DriveSource {
    fn fetch_drives(&self) -> Result<Vec<RawDrive>>;
}

impl DriveSource for Vec<RawDrive> {
    fn fetch_drives(&self) -> Result<Vec<RawDrive>> {
        Ok(self.clone())
    }
}

/// Reads a JSON array of drives, e.g. an export from the telemetry provider.
#[derive(Debug, Clone)]
pub struct JsonDriveSource {
    path: PathBuf,
}

impl JsonDriveSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DriveSource for JsonDriveSource {
    fn fetch_drives(&self) -> Result<Vec<RawDrive>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read drives from {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse drives in {}", self.path.display()))
    }
}
