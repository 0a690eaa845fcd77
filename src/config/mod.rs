//! Configuration management
//!
//! Layered loading with the `config` crate:
//! 1. `default.toml` - Base default configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local overrides (not committed to version control)
//! 4. `VUOWMA_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ForwarderConfig, HttpConfig, LoggerSettings, Settings};
