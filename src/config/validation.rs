//! Configuration validation logic
//!
//! Checks run after all sources are merged, so that a bad environment
//! override is reported the same way as a bad file value.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{ForwarderConfig, HttpConfig, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Require `value` to be a present, absolute http(s) URL.
fn validate_http_url(field: &str, value: Option<&str>) -> Result<(), ConfigError> {
    let raw = match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(ConfigError::invalid(
                field,
                "A URL is required. Set it in the configuration file or via environment variable.",
            ));
        }
    };

    let url = Url::parse(raw)
        .map_err(|e| ConfigError::invalid(field, format!("Invalid URL '{raw}': {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::invalid(
            field,
            format!("URL must use http or https, got '{}'", url.scheme()),
        ));
    }

    Ok(())
}

impl ForwarderConfig {
    /// Validate forwarder configuration
    ///
    /// # Validation Rules
    /// - `base_url` and `webhook_url` must be present http(s) URLs
    /// - `message_format` is free-form: anything but `messagecard` selects adaptive cards
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("forwarder.base_url", self.base_url.as_deref())?;
        validate_http_url("forwarder.webhook_url", self.webhook_url.as_deref())?;
        Ok(())
    }
}

impl HttpConfig {
    /// Validate HTTP client configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::invalid(
                "http.timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::invalid(
                "http.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout > self.timeout {
            return Err(ConfigError::invalid(
                "http.connect_timeout",
                "Connect timeout cannot exceed the request timeout.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// A plain level is checked against the known levels; anything containing
    /// `=` or `,` is treated as an `EnvFilter` directive and left to the logger.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.trim().to_lowercase();
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.trim().to_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "logger.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.forwarder.validate()?;
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
