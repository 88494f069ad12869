use anyhow::{Context, Result};

use crate::cli::Config;
use crate::render;
use crate::search::search;

pub fn run_search(config: &Config, query: &str, json: bool) -> Result<()> {
    let catalog = config.load_catalog()?;
    let results = search(catalog.topics(), query);

    if json {
        let out =
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for '{}'.", query.trim());
        return Ok(());
    }

    print!("{}", render::search_results(&results));
    println!("\n  Use 'prepdeck show <topic> [subtopic]' to open a result");

    Ok(())
}
