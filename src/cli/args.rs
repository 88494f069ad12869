use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prepdeck - interview-prep study dashboard
#[derive(Parser)]
#[command(name = "prepdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for progress files. Defaults to the platform data directory
    #[arg(long, env = "PREPDECK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Topic catalog JSON file. Defaults to the bundled catalog
    #[arg(long, env = "PREPDECK_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List topics with completion status
    Topics,
    /// Show a topic, or one of its subtopics in full
    Show {
        /// Topic id (e.g. css3)
        topic: String,

        /// Subtopic id (e.g. flexbox)
        subtopic: Option<String>,
    },
    /// Search titles, definitions and interview questions
    Search {
        /// Text to look for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a topic as complete
    Complete {
        /// Topic id
        topic: String,
    },
    /// Show the revision checklist
    Checklist,
    /// Toggle a checklist item
    Check {
        /// Checklist item id (e.g. c1)
        item: String,
    },
    /// Clear all checklist progress
    ResetChecklist {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show overall progress
    Progress,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::parse_from(["prepdeck", "search", "event", "loop", "--json"]);
        match cli.command {
            Some(Commands::Search { query, json }) => {
                assert_eq!(query, vec!["event", "loop"]);
                assert!(json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_show_with_subtopic() {
        let cli = Cli::parse_from(["prepdeck", "show", "css3", "flexbox", "--data-dir", "/tmp/x"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        match cli.command {
            Some(Commands::Show { topic, subtopic }) => {
                assert_eq!(topic, "css3");
                assert_eq!(subtopic.as_deref(), Some("flexbox"));
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_reset_yes_flag() {
        let cli = Cli::parse_from(["prepdeck", "reset-checklist", "-y"]);
        assert!(matches!(
            cli.command,
            Some(Commands::ResetChecklist { yes: true })
        ));
    }
}
