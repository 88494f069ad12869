use anyhow::Result;
use tracing::warn;

use super::open_tracker;
use crate::cli::Config;
use crate::render;

pub fn run_complete(config: &Config, topic_id: &str) -> Result<()> {
    let catalog = config.load_catalog()?;
    let mut tracker = open_tracker(config);

    if catalog.topic(topic_id).is_none() {
        warn!("'{}' is not a topic in the catalog", topic_id);
    }

    if tracker.is_topic_complete(topic_id) {
        println!("'{}' is already marked complete.", topic_id);
    } else {
        tracker.mark_topic_complete(topic_id);
        println!("✅ Marked '{}' complete.", topic_id);
    }

    let progress = tracker.topic_progress(&catalog);
    println!("   {}", render::progress_bar(&progress));

    Ok(())
}
