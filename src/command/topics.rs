use anyhow::Result;

use super::open_tracker;
use crate::cli::Config;
use crate::render;

pub fn run_topics(config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let tracker = open_tracker(config);

    let progress = tracker.topic_progress(&catalog);
    print!(
        "{}",
        render::topic_list(catalog.topics(), tracker.completed_topics(), &progress)
    );

    Ok(())
}
