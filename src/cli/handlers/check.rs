//! Check command handler

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::Forwarder;

/// Validates settings and reports what a forward run would use
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Build the report lines printed to stdout. Settings arrive already
    /// validated by the merger; only the forwarder construction check runs here.
    pub fn report(&self) -> AppResult<Vec<String>> {
        let forwarder = Forwarder::new(&self.config.forwarder)?;

        Ok(vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Webhook: {}", forwarder.webhook_url()),
            format!("✓ Batch links: {}?batch=<id>", forwarder.base_url()),
            format!("✓ Message format: {}", forwarder.message_format()),
            format!(
                "✓ HTTP timeout: {}s (connect {}s)",
                self.config.http.timeout, self.config.http.connect_timeout
            ),
        ])
    }

    pub async fn execute(&self) -> AppResult<()> {
        for line in self.report()? {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForwarderConfig;
    use crate::error::AppError;

    #[test]
    fn test_report_lists_effective_settings() {
        let config = Settings {
            forwarder: ForwarderConfig::new(
                "https://logs.example.com/view",
                "https://hooks.example.com/abc",
            )
            .with_format("AdaptiveCard"),
            ..Settings::default()
        };

        let report = CheckCommandHandler::new(config).report().unwrap();
        assert!(report.contains(&"✓ Webhook: https://hooks.example.com/abc".to_string()));
        assert!(report.contains(&"✓ Message format: adaptivecard".to_string()));
    }

    #[test]
    fn test_report_fails_without_webhook() {
        let result = CheckCommandHandler::new(Settings::default()).report();
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }

    #[test]
    fn test_report_leaves_settings_validation_to_merger() {
        let mut config = Settings {
            forwarder: ForwarderConfig::new(
                "https://logs.example.com/view",
                "https://hooks.example.com/abc",
            ),
            ..Settings::default()
        };
        config.http.timeout = 0;

        let report = CheckCommandHandler::new(config).report().unwrap();
        assert!(report.contains(&"✓ HTTP timeout: 0s (connect 10s)".to_string()));
    }

    #[test]
    fn test_report_names_missing_url() {
        let config = Settings {
            forwarder: ForwarderConfig {
                base_url: None,
                webhook_url: Some("https://hooks.example.com/abc".to_string()),
                message_format: None,
            },
            ..Settings::default()
        };

        match CheckCommandHandler::new(config).report() {
            Err(AppError::Configuration { key, .. }) => assert_eq!(key, "forwarder.base_url"),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}
