use anyhow::Result;

use super::{open_tracker, run_checklist};
use crate::cli::Config;
use crate::render;

pub fn run_show(config: &Config, topic_id: &str, subtopic_id: Option<&str>) -> Result<()> {
    let catalog = config.load_catalog()?;

    let Some(topic) = catalog.topic(topic_id) else {
        anyhow::bail!(
            "Unknown topic '{}'. Run 'prepdeck topics' to list topics.",
            topic_id
        );
    };

    if topic.is_checklist() && subtopic_id.is_none() {
        return run_checklist(config);
    }

    match subtopic_id {
        Some(subtopic_id) => {
            let Some(subtopic) = catalog.subtopic(topic_id, subtopic_id) else {
                anyhow::bail!(
                    "Topic '{}' has no subtopic '{}'. Run 'prepdeck show {}' to list them.",
                    topic_id,
                    subtopic_id,
                    topic_id
                );
            };
            print!("{}", render::subtopic_detail(topic, subtopic));
        }
        None => {
            let tracker = open_tracker(config);
            print!(
                "{}",
                render::topic_overview(topic, tracker.is_topic_complete(&topic.id))
            );
        }
    }

    Ok(())
}
