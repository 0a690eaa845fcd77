use std::sync::LazyLock;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::{AppError, AppResult};

/// Process-wide HTTP client used when no client is injected
///
/// Built lazily from [`HttpConfig::default`]: 30s request timeout, 10s connect
/// timeout, rustls for TLS.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_http_client(&HttpConfig::default()).expect("Failed to build HTTP client")
});

/// Build a client from the `[http]` settings section
pub fn build_http_client(config: &HttpConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| AppError::configuration("http", format!("Failed to build HTTP client: {e}")))
}
