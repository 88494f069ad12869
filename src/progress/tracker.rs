//! Topic completion and checklist state, persisted on every change.

use tracing::{debug, info, warn};

use super::confirm::Confirm;
use super::store::{CompletionMap, KeyValueStore, CHECKLIST_PROGRESS_KEY, COMPLETED_TOPICS_KEY};
use crate::content::Catalog;

const RESET_PROMPT: &str = "Are you sure you want to reset all checklist progress?";

/// Rounded completion percentage. Zero when there is nothing to complete.
///
/// Rounds half up: 1/3 is 33, 2/3 is 67, 1/8 is 13.
pub fn compute_progress(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = completed as u64;
    let total = total as u64;
    ((200 * completed + total) / (2 * total)) as u32
}

/// Counts plus the derived percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percent: compute_progress(completed, total),
        }
    }
}

/// Owns both completion mappings and the store they persist to.
///
/// Storage failures never propagate: a bad load starts from an empty map and
/// a failed write is logged while the in-memory state stays authoritative.
pub struct ProgressTracker<S: KeyValueStore> {
    store: S,
    completed_topics: CompletionMap,
    checklist: CompletionMap,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        let completed_topics = load_or_empty(&store, COMPLETED_TOPICS_KEY);
        let checklist = load_or_empty(&store, CHECKLIST_PROGRESS_KEY);
        Self {
            store,
            completed_topics,
            checklist,
        }
    }

    #[allow(dead_code)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn completed_topics(&self) -> &CompletionMap {
        &self.completed_topics
    }

    pub fn checklist_state(&self) -> &CompletionMap {
        &self.checklist
    }

    pub fn is_topic_complete(&self, topic_id: &str) -> bool {
        self.completed_topics.is_set(topic_id)
    }

    pub fn is_item_checked(&self, item_id: &str) -> bool {
        self.checklist.is_set(item_id)
    }

    /// Mark a topic as done. Marking twice changes nothing.
    pub fn mark_topic_complete(&mut self, topic_id: &str) {
        if self.is_topic_complete(topic_id) {
            debug!("Topic '{}' already complete", topic_id);
            return;
        }
        self.completed_topics.set(topic_id, true);
        info!("Marked topic '{}' complete", topic_id);
        persist(&mut self.store, COMPLETED_TOPICS_KEY, &self.completed_topics);
    }

    /// Flip a checklist item and return its new state.
    pub fn toggle_checklist_item(&mut self, item_id: &str) -> bool {
        let checked = !self.checklist.is_set(item_id);
        self.checklist.set(item_id, checked);
        debug!("Checklist item '{}' -> {}", item_id, checked);
        persist(&mut self.store, CHECKLIST_PROGRESS_KEY, &self.checklist);
        checked
    }

    /// Clear all checklist progress if `confirm` agrees.
    ///
    /// Returns `true` when the checklist was reset. A declined prompt leaves
    /// state and storage untouched.
    pub fn reset_checklist(&mut self, confirm: &mut dyn Confirm) -> bool {
        if !confirm.confirm(RESET_PROMPT) {
            debug!("Checklist reset declined");
            return false;
        }
        self.checklist.clear();
        info!("Checklist progress reset");
        persist(&mut self.store, CHECKLIST_PROGRESS_KEY, &self.checklist);
        true
    }

    /// Completed topics out of every topic in the catalog.
    pub fn topic_progress(&self, catalog: &Catalog) -> Progress {
        let completed = catalog
            .topics()
            .iter()
            .filter(|t| self.is_topic_complete(&t.id))
            .count();
        Progress::new(completed, catalog.len())
    }

    /// Checked items out of the catalog's checklist items. Stale ids in
    /// storage are ignored.
    pub fn checklist_progress(&self, catalog: &Catalog) -> Progress {
        let mut total = 0;
        let mut completed = 0;
        for item in catalog.checklist_items() {
            total += 1;
            if self.is_item_checked(&item.id) {
                completed += 1;
            }
        }
        Progress::new(completed, total)
    }
}

fn load_or_empty<S: KeyValueStore>(store: &S, key: &str) -> CompletionMap {
    match CompletionMap::load(store, key) {
        Ok(map) => map,
        Err(e) => {
            warn!("Ignoring stored '{}': {}", key, e);
            CompletionMap::default()
        }
    }
}

fn persist<S: KeyValueStore>(store: &mut S, key: &str, map: &CompletionMap) {
    if let Err(e) = map.save(store, key) {
        warn!("Failed to persist '{}': {}", key, e);
    }
}
