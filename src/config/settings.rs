//! Configuration settings structures for the forwarder
//!
//! Every section can be supplied through TOML files or `VUOWMA_*`
//! environment variables (see [`crate::config::ConfigLoader`]).

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("vuowma-forwarder/{}", crate::pkg_version())
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Forwarder Configuration
// ============================================================================

/// Webhook forwarding configuration
///
/// `base_url` and `webhook_url` are optional here so the layered sources can
/// each leave them out. Settings validation and `Forwarder::new` both reject
/// a merged config that is still missing either one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ForwarderConfig {
    /// Public URL of the log viewer, used to link back to a batch
    #[serde(default)]
    pub base_url: Option<String>,

    /// Destination of the POST
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// `messagecard` (default) or `adaptivecard`
    #[serde(default)]
    pub message_format: Option<String>,
}

impl ForwarderConfig {
    pub fn new(base_url: impl Into<String>, webhook_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            webhook_url: Some(webhook_url.into()),
            message_format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.message_format = Some(format.into());
        self
    }
}

// ============================================================================
// HTTP Client Configuration
// ============================================================================

/// Outbound HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// TCP/TLS connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// User-Agent header sent with every webhook POST
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level or full `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to use colored output when attached to a terminal
    #[serde(default = "default_true")]
    pub colored: bool,

    /// Output format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            colored: default_true(),
            format: default_log_format(),
        }
    }
}

impl LoggerSettings {
    /// Convert the file representation into the runtime [`LoggerConfig`]
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::invalid("logger.format", e.to_string()))?;

        LoggerConfig::new(ConsoleConfig::new(self.colored, format), self.level)
            .map_err(|e| ConfigError::invalid("logger", e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub forwarder: ForwarderConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub logger: LoggerSettings,
}
