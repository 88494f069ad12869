mod checklist;
mod complete;
mod progress;
mod search;
mod show;
mod topics;

pub use checklist::{run_check, run_checklist, run_reset_checklist};
pub use complete::run_complete;
pub use progress::run_progress;
pub use search::run_search;
pub use show::run_show;
pub use topics::run_topics;

use crate::cli::Config;
use crate::progress::{FileStore, ProgressTracker};

/// Tracker backed by the configured data directory.
fn open_tracker(config: &Config) -> ProgressTracker<FileStore> {
    ProgressTracker::new(FileStore::new(&config.data_dir))
}
