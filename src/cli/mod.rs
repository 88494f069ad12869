mod args;
mod config;

pub use args::{Cli, Commands};
pub use config::Config;
