//! Study progress: completed topics and the revision checklist.
//!
//! Both mappings are loaded from durable storage when a tracker is created
//! and written back after every change.

mod confirm;
mod store;
mod tracker;

pub use confirm::{AssumeYes, Confirm, PromptConfirm};
pub use store::{CompletionMap, FileStore};
pub use tracker::{Progress, ProgressTracker};
