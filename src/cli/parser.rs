//! CLI argument parsing with clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;
use crate::config::Environment as AppEnvironment;

/// Forward pending log messages to a chat-ops webhook
#[derive(Parser, Debug)]
#[command(name = "vuowma")]
#[command(about = "Forward pending log messages to a chat-ops webhook")]
#[command(long_about = "
vuowma collapses a batch of pending log messages into a single card and
posts it to an incoming webhook (MessageCard or AdaptiveCard format).
Batches that failed on an earlier run can be re-announced with --unsent.

EXAMPLES:
    # Forward a batch read from a file
    vuowma forward --messages batch.json --batch-id 42

    # Re-announce two failed batches along with the current one
    vuowma forward --messages batch.json --batch-id 42 --unsent 40,41

    # Read messages from stdin and print the card instead of posting it
    cat batch.json | vuowma forward --messages - --dry-run

    # Check configuration
    vuowma --config /etc/vuowma/forwarder.toml check
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered config/ directory.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection (selects `{env}.toml`)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override `forwarder.webhook_url`
    #[arg(long, value_name = "URL", env = "VUOWMA_WEBHOOK_URL", value_parser = super::validation::validate_http_url)]
    pub webhook_url: Option<String>,

    /// Override `forwarder.base_url`
    #[arg(long, value_name = "URL", value_parser = super::validation::validate_http_url)]
    pub base_url: Option<String>,

    /// Override `forwarder.message_format` (messagecard or adaptivecard)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Forward one batch of messages
    ///
    /// Reads a JSON array of message payloads. Each element is either a card
    /// object or a string holding a serialized card.
    Forward {
        /// Messages file, or `-` for stdin
        #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_messages_source)]
        messages: PathBuf,

        /// Id of the batch being forwarded
        #[arg(short, long, value_name = "ID", value_parser = super::validation::validate_batch_id)]
        batch_id: Option<i64>,

        /// Ids of earlier batches that failed and must be re-announced, in order
        #[arg(short, long, value_name = "ID", value_delimiter = ',', value_parser = super::validation::validate_batch_id)]
        unsent: Vec<i64>,

        /// Print the card that would be sent and exit
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration and print the effective forwarder settings
    Check,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for AppEnvironment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => AppEnvironment::Development,
            Environment::Test => AppEnvironment::Test,
            Environment::Staging => AppEnvironment::Staging,
            Environment::Production => AppEnvironment::Production,
        }
    }
}
