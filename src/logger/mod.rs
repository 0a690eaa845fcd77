//! Logger initialisation based on `tracing-subscriber`
//!
//! Logs go to stderr so that stdout stays free for command output
//! (for example the card printed by `vuowma forward --dry-run`).

pub mod config;

#[cfg(test)]
mod tests;

pub use self::config::*;

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the `EnvFilter` for a level string or directive list
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level.trim()).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber with the given configuration
///
/// # Errors
/// Fails if the configuration is invalid or a global subscriber is already set.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = build_filter(&config.level);
    let use_ansi = config.console.colored && std::io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    match config.console.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}
