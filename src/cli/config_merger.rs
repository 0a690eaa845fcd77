//! Configuration merger for CLI arguments and config files
//!
//! Command-line values take precedence over files and `VUOWMA_*` variables.

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Applies CLI overrides on top of file/environment configuration
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration the way the CLI asks for it
    ///
    /// `--config` selects a single file, otherwise the layered loader is used;
    /// `--env` replaces `VUOWMA_APP_ENV`. Validation is deferred to
    /// [`ConfigurationMerger::merge_cli_args`] so that missing URLs can be
    /// supplied on the command line.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config {
            Some(ref path) => ConfigLoader::with_file(path),
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.environment_override(env.into()),
            None => loader,
        };

        Ok(Self::new(loader.load_unvalidated()?))
    }

    /// Merge CLI arguments with the base configuration and validate the result
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(ref url) = cli.webhook_url {
            config.forwarder.webhook_url = Some(url.clone());
        }
        if let Some(ref url) = cli.base_url {
            config.forwarder.base_url = Some(url.clone());
        }
        if let Some(ref format) = cli.format {
            config.forwarder.message_format = Some(format.clone());
        }

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}
