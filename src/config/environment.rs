//! Deployment stage that selects the `{stage}.toml` overlay

use std::fmt;
use std::str::FromStr;

use crate::config::error::ConfigError;

/// Stage the forwarder is deployed in
///
/// Only affects which overlay file the layered loader merges on top of
/// `default.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Variable read by [`Environment::from_env`]
    pub const ENV_VAR: &'static str = "VUOWMA_APP_ENV";

    const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Test,
        Environment::Staging,
        Environment::Production,
    ];

    /// Stage from `VUOWMA_APP_ENV`; unset or unknown values mean `Development`
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Short name accepted in addition to the full one
    fn alias(&self) -> Option<&'static str> {
        match self {
            Environment::Development => Some("dev"),
            Environment::Test => None,
            Environment::Staging => Some("stage"),
            Environment::Production => Some("prod"),
        }
    }

    /// File name of the optional overlay merged after `default.toml`
    pub fn overlay_file(&self) -> String {
        format!("{}.toml", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == wanted || env.alias() == Some(wanted.as_str()))
            .ok_or(ConfigError::UnknownEnvironment { value: wanted })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_aliases() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("stage".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" Test ".parse::<Environment>().unwrap(), Environment::Test);
    }

    #[test]
    fn test_unknown_environment_is_reported_against_env_var() {
        let err = "qa".parse::<Environment>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment { ref value } if value == "qa"));
        assert_eq!(err.key(), Environment::ENV_VAR);
    }

    #[test]
    fn test_overlay_file_names() {
        assert_eq!(Environment::default().overlay_file(), "development.toml");
        assert_eq!(Environment::Production.overlay_file(), "production.toml");
        assert_eq!(Environment::Staging.to_string(), "staging");
    }
}
