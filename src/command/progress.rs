use anyhow::Result;

use super::open_tracker;
use crate::cli::Config;
use crate::render;

pub fn run_progress(config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let tracker = open_tracker(config);

    let topics = tracker.topic_progress(&catalog);
    println!(
        "Topics:    {}  {} of {} topics",
        render::progress_bar(&topics),
        topics.completed,
        topics.total
    );

    if catalog.checklist().is_some() {
        let checklist = tracker.checklist_progress(&catalog);
        println!(
            "Checklist: {}  {} / {} completed",
            render::progress_bar(&checklist),
            checklist.completed,
            checklist.total
        );
    }

    println!("\nProgress is stored in {}", config.data_dir.display());

    Ok(())
}
