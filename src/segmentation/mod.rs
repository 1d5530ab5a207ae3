pub mod aggregate;
pub mod config;
pub mod merge;

pub use aggregate::{aggregate_group, classify_stop, detect_stops};
pub use config::MergeConfig;
pub use merge::{group_drives, merge_drives, should_merge};
