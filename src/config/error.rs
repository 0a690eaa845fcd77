//! Errors raised while loading or validating settings

use std::path::PathBuf;

use thiserror::Error;

use crate::config::environment::Environment;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required TOML file does not exist
    #[error("Required configuration file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Sources merged but do not deserialize into `Settings`
    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(#[source] config::ConfigError),

    /// A loaded value is not acceptable
    #[error("Invalid {key}: {message}")]
    Invalid {
        /// Dotted path of the offending key, e.g. `forwarder.base_url`
        key: String,
        message: String,
    },

    #[error(
        "Unknown environment '{value}' in VUOWMA_APP_ENV. \
         Valid values are: development, test, staging, production"
    )]
    UnknownEnvironment { value: String },

    /// Two config locations were requested at once
    #[error("{first} and {second} cannot both be set")]
    ConflictingSources {
        first: &'static str,
        second: &'static str,
    },

    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        ConfigError::MissingFile { path: path.into() }
    }

    /// Setting or variable an operator has to fix
    pub fn key(&self) -> &str {
        match self {
            ConfigError::MissingFile { .. } => "config_file",
            ConfigError::Invalid { key, .. } => key,
            ConfigError::UnknownEnvironment { .. } => Environment::ENV_VAR,
            ConfigError::ConflictingSources { .. } => "config_source",
            ConfigError::Deserialize(_) | ConfigError::Source(_) => "config",
        }
    }
}
