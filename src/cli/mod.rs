//! Command-line driver
//!
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files + environment)
//! - Command handlers for `forward` and `check`

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load file/environment configuration and apply CLI overrides
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger = ConfigurationMerger::from_cli(cli)?;
    Ok(merger.merge_cli_args(cli)?)
}

/// Initialize the global logger from settings
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}
