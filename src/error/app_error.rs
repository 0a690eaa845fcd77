use crate::config::error::ConfigError;
use thiserror::Error;

/// Error type shared by the forwarder, its HTTP client and the CLI driver.
///
/// Delivery failures carry enough context (target URL, status code and the
/// response body) for the caller to decide whether to mark a batch as unsent.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required setting is missing or unusable
    #[error("Configuration error: {key}: {reason}")]
    Configuration { key: String, reason: String },

    /// A message payload could not be interpreted as a card object
    #[error("Invalid message payload: {reason}")]
    InvalidPayload { reason: String },

    /// The webhook answered with a non-success status
    #[error("Webhook {url} responded with status {status}: {body}")]
    Delivery {
        url: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("Failed to reach webhook {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// I/O error while reading driver input
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for a configuration error on `key`
    pub fn configuration(key: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Configuration {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure happened after the webhook was reached
    pub fn is_delivery(&self) -> bool {
        matches!(self, AppError::Delivery { .. })
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Invalid { key, message } => AppError::Configuration {
                key,
                reason: message,
            },
            other => AppError::Configuration {
                key: other.key().to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::InvalidPayload {
            reason: error.to_string(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_display() {
        let err = AppError::Delivery {
            url: "https://hooks.example.com/abc".to_string(),
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Webhook https://hooks.example.com/abc responded with status 502: bad gateway"
        );
        assert!(err.is_delivery());
    }

    #[test]
    fn test_config_validation_error_keeps_field() {
        let err: AppError = ConfigError::invalid("forwarder.webhook_url", "is required").into();
        match err {
            AppError::Configuration { key, reason } => {
                assert_eq!(key, "forwarder.webhook_url");
                assert_eq!(reason, "is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_config_error_key_carried_into_app_error() {
        let err: AppError = "qa".parse::<crate::config::Environment>().unwrap_err().into();
        match err {
            AppError::Configuration { key, reason } => {
                assert_eq!(key, "VUOWMA_APP_ENV");
                assert!(reason.contains("'qa'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err: AppError = ConfigError::missing_file("config/default.toml").into();
        assert!(matches!(err, AppError::Configuration { ref key, .. } if key == "config_file"));
    }

    #[test]
    fn test_json_error_becomes_invalid_payload() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::InvalidPayload { .. }));
        assert!(!err.is_delivery());
    }
}
