use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod command;
mod content;
mod progress;
mod render;
mod search;

use cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(cli.data_dir, cli.catalog)?;

    match cli.command {
        Some(Commands::Topics) => command::run_topics(&config)?,
        Some(Commands::Show { topic, subtopic }) => {
            command::run_show(&config, &topic, subtopic.as_deref())?
        }
        Some(Commands::Search { query, json }) => {
            command::run_search(&config, &query.join(" "), json)?
        }
        Some(Commands::Complete { topic }) => command::run_complete(&config, &topic)?,
        Some(Commands::Checklist) => command::run_checklist(&config)?,
        Some(Commands::Check { item }) => command::run_check(&config, &item)?,
        Some(Commands::ResetChecklist { yes }) => command::run_reset_checklist(&config, yes)?,
        Some(Commands::Progress) => command::run_progress(&config)?,
        None => {
            // No command specified, show help
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Use 'prepdeck topics' to browse or 'prepdeck search <text>' to search.");
        }
    }

    Ok(())
}
