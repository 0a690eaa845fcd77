//! Configuration types for the logger

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Main logger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub console: ConsoleConfig,
    /// A plain level (`info`) or an `EnvFilter` directive list
    pub level: String,
}

impl LoggerConfig {
    /// Create a new logger configuration with validation
    ///
    /// Surrounding whitespace is stripped from the level before it is checked.
    pub fn new(console: ConsoleConfig, level: String) -> Result<Self> {
        let level = level.trim().to_string();
        let config = Self { console, level };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.is_directive() {
            tracing_subscriber::EnvFilter::try_new(&self.level)
                .with_context(|| format!("Invalid log directive: {}", self.level))?;
        } else {
            self.parse_level()
                .with_context(|| format!("Invalid log level: {}", self.level))?;
        }
        Ok(())
    }

    /// Parse the level string into a `tracing::Level`
    pub fn parse_level(&self) -> Result<Level> {
        match self.level.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" | "warning" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                self.level
            ),
        }
    }

    /// Replace the level, e.g. from `--verbose` / `--quiet`
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn is_directive(&self) -> bool {
        self.level.contains('=') || self.level.contains(',')
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            level: "info".to_string(),
        }
    }
}

/// Console (stderr) output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub colored: bool,
    pub format: LogFormat,
}

impl ConsoleConfig {
    pub fn new(colored: bool, format: LogFormat) -> Self {
        Self { colored, format }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            colored: true,
            format: LogFormat::Full,
        }
    }
}

/// Log format options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            ),
        }
    }
}
