//! Configuration loader for the forwarder
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "VUOWMA_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "VUOWMA_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "VUOWMA";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources, lowest priority first:
/// 1. `default.toml` (required)
/// 2. `{environment}.toml` (optional)
/// 3. `local.toml` (optional)
/// 4. `VUOWMA_*` environment variables
///
/// When a single file is selected (`VUOWMA_CONFIG_FILE` or
/// [`ConfigLoader::with_file`]) steps 1-3 are replaced by that file.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `VUOWMA_CONFIG_DIR`, `VUOWMA_CONFIG_FILE` and `VUOWMA_APP_ENV`
    ///
    /// # Errors
    ///
    /// Returns an error if both `VUOWMA_CONFIG_DIR` and `VUOWMA_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir_var = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && config_dir_var.is_some() {
            return Err(ConfigError::ConflictingSources {
                first: CONFIG_DIR_ENV,
                second: CONFIG_FILE_ENV,
            });
        }

        Ok(Self {
            config_dir: config_dir_var
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Create a loader that reads exactly one file (plus environment overrides)
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment overlay picked from `VUOWMA_APP_ENV`
    pub fn environment_override(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings = self.load_unvalidated()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration without running validation
    ///
    /// Used by the CLI, which applies command-line overrides before validating.
    pub fn load_unvalidated(&self) -> Result<Settings, ConfigError> {
        self.build_config()?
            .try_deserialize()
            .map_err(ConfigError::Deserialize)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // VUOWMA_FORWARDER__WEBHOOK_URL -> forwarder.webhook_url
        Self::add_env_source(builder)
            .build()
            .map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = Self::add_file_source(builder, &self.config_dir.join("default.toml"), true)?;

        let overlay = self.config_dir.join(self.environment.overlay_file());
        let builder = Self::add_file_source(builder, &overlay, false)?;

        Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.is_file() {
            return Err(ConfigError::missing_file(path));
        }

        Ok(builder.add_source(
            File::new(&path.to_string_lossy(), FileFormat::Toml).required(required),
        ))
    }

    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests in this module mutate process environment variables
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    const DEFAULT_TOML: &str = r#"
[forwarder]
base_url = "https://logs.example.com/view"
webhook_url = "https://hooks.example.com/default"

[http]
timeout = 20
connect_timeout = 5

[logger]
level = "info"
format = "compact"
"#;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Restores touched environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for key in [
                CONFIG_DIR_ENV,
                CONFIG_FILE_ENV,
                AppEnvironment::ENV_VAR,
                "VUOWMA_FORWARDER__WEBHOOK_URL",
                "VUOWMA_HTTP__TIMEOUT",
            ] {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_config_loader_new_default() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_conflicting_sources() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set(CONFIG_DIR_ENV, "/etc/vuowma");
        env.set(CONFIG_FILE_ENV, "/etc/vuowma/forwarder.toml");

        assert!(matches!(
            ConfigLoader::new(),
            Err(ConfigError::ConflictingSources { .. })
        ));
    }

    #[test]
    fn test_load_missing_default_toml() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        match ConfigLoader::new().unwrap().load() {
            Err(ConfigError::MissingFile { path }) => assert!(path.ends_with("default.toml")),
            other => panic!("Expected MissingFile error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_default_toml_only() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");
        assert_eq!(
            settings.forwarder.webhook_url.as_deref(),
            Some("https://hooks.example.com/default")
        );
        assert_eq!(settings.http.timeout, 20);
        assert_eq!(settings.logger.format, "compact");
        assert!(settings.forwarder.message_format.is_none());
    }

    #[test]
    fn test_load_with_environment_and_local_overrides() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            (
                "production.toml",
                "[forwarder]\nwebhook_url = \"https://hooks.example.com/prod\"\nmessage_format = \"adaptivecard\"\n",
            ),
            ("local.toml", "[http]\ntimeout = 45\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "prod");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");
        assert_eq!(
            settings.forwarder.webhook_url.as_deref(),
            Some("https://hooks.example.com/prod")
        );
        assert_eq!(settings.forwarder.message_format.as_deref(), Some("adaptivecard"));
        assert_eq!(settings.http.timeout, 45);
        // untouched by overlays
        assert_eq!(settings.http.connect_timeout, 5);
        assert_eq!(
            settings.forwarder.base_url.as_deref(),
            Some("https://logs.example.com/view")
        );
    }

    #[test]
    fn test_load_with_env_var_override() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("VUOWMA_FORWARDER__WEBHOOK_URL", "https://hooks.example.com/env");
        env.set("VUOWMA_HTTP__TIMEOUT", "60");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");
        assert_eq!(
            settings.forwarder.webhook_url.as_deref(),
            Some("https://hooks.example.com/env")
        );
        assert_eq!(settings.http.timeout, 60);
    }

    #[test]
    fn test_with_file_skips_layering() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("forwarder.toml", DEFAULT_TOML)]);

        let settings = ConfigLoader::with_file(temp_dir.path().join("forwarder.toml"))
            .load()
            .expect("Should load settings");
        assert_eq!(settings.http.timeout, 20);
    }

    #[test]
    fn test_load_unvalidated_allows_missing_urls() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("forwarder.toml", "[logger]\nlevel = \"debug\"\n")]);
        let loader = ConfigLoader::with_file(temp_dir.path().join("forwarder.toml"));

        let settings = loader.load_unvalidated().expect("Should load settings");
        assert!(settings.forwarder.webhook_url.is_none());
        assert!(matches!(
            loader.load(),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
