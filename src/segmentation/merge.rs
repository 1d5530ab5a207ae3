use crate::error::Result;
use crate::log_debug;
use crate::models::{MergedDrive, RawDrive};
use crate::segmentation::aggregate::aggregate_group;
use crate::segmentation::config::MergeConfig;

const ENABLE_LOGS: bool = true;

/// Groups being built while walking the sorted drives.
struct MergeState {
    open_group: Vec<RawDrive>,
    finished: Vec<Vec<RawDrive>>,
}

impl MergeState {
    fn new() -> Self {
        Self {
            open_group: Vec::new(),
            finished: Vec::new(),
        }
    }

    fn push(mut self, drive: RawDrive, config: &MergeConfig) -> Self {
        let continues = self
            .open_group
            .last()
            .map_or(true, |prev| should_merge(prev, &drive, config));

        if !continues {
            let closed = std::mem::take(&mut self.open_group);
            self.finished.push(closed);
        }

        self.open_group.push(drive);
        self
    }

    fn finish(mut self) -> Vec<Vec<RawDrive>> {
        if !self.open_group.is_empty() {
            self.finished.push(self.open_group);
        }
        self.finished
    }
}

/// Whether `next` continues the journey that `prev` belongs to.
///
/// A short gap merges. A longer gap still merges when the battery rose by
/// more than the charging threshold, since the car sat on a charger.
pub fn should_merge(prev: &RawDrive, next: &RawDrive, config: &MergeConfig) -> bool {
    prev.gap_minutes_to(next) < config.max_gap_minutes
        || prev.battery_delta_to(next) > config.charging_battery_delta
}

/// Sort drives by start time and split them into journey groups.
///
/// Each drive is compared with the one right before it, so merging chains:
/// C joins A's group when it only fits with B.
pub fn group_drives(mut drives: Vec<RawDrive>, config: &MergeConfig) -> Vec<Vec<RawDrive>> {
    // stable: equal start times keep input order
    drives.sort_by_key(|d| d.start_time);

    drives
        .into_iter()
        .fold(MergeState::new(), |state, drive| state.push(drive, config))
        .finish()
}

/// Merge drives into journeys, oldest first.
pub fn merge_drives(drives: Vec<RawDrive>, config: &MergeConfig) -> Result<Vec<MergedDrive>> {
    let input_count = drives.len();
    let merged = group_drives(drives, config)
        .iter()
        .map(|group| aggregate_group(group, config))
        .collect::<Result<Vec<_>>>()?;

    log_debug!("Merged {} drives into {} journeys", input_count, merged.len());

    Ok(merged)
}
