use anyhow::Result;
use tracing::warn;

use super::open_tracker;
use crate::cli::Config;
use crate::progress::{AssumeYes, Confirm, PromptConfirm};
use crate::render;

pub fn run_checklist(config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let Some(topic) = catalog.checklist() else {
        println!("This catalog has no revision checklist.");
        return Ok(());
    };

    let tracker = open_tracker(config);
    let progress = tracker.checklist_progress(&catalog);
    print!(
        "{}",
        render::checklist(topic, tracker.checklist_state(), &progress)
    );

    Ok(())
}

pub fn run_check(config: &Config, item_id: &str) -> Result<()> {
    let catalog = config.load_catalog()?;
    let mut tracker = open_tracker(config);

    let item = catalog.checklist_items().find(|i| i.id == item_id);
    if item.is_none() {
        warn!("'{}' is not a checklist item in the catalog", item_id);
    }

    let checked = tracker.toggle_checklist_item(item_id);
    let label = item.map(|i| i.text.as_str()).unwrap_or(item_id);
    if checked {
        println!("[x] {}", label);
    } else {
        println!("[ ] {}", label);
    }

    let progress = tracker.checklist_progress(&catalog);
    println!(
        "    {} / {} completed {}",
        progress.completed,
        progress.total,
        render::progress_bar(&progress)
    );

    Ok(())
}

pub fn run_reset_checklist(config: &Config, assume_yes: bool) -> Result<()> {
    let mut tracker = open_tracker(config);

    let mut confirm: Box<dyn Confirm> = if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(PromptConfirm::stdin())
    };

    if tracker.reset_checklist(&mut *confirm) {
        println!("✅ Checklist progress cleared.");
    } else {
        println!("Reset cancelled. Your checklist progress is unchanged.");
    }

    Ok(())
}
