//! Webhook client abstraction.
//!
//! The forwarder only needs "POST this JSON, tell me the status and body".
//! Keeping that behind a trait lets callers inject their own client
//! (a preconfigured reqwest client, or an in-memory fake in tests).

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::client::HTTP_CLIENT;
use crate::error::{AppError, AppResult};

/// Status and body of a webhook response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON document to a webhook URL
///
/// Implementations return `Ok` for any HTTP response, successful or not;
/// `Err` is reserved for requests that never got a response.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// POST `body` as `application/json` to `url`, exactly once
    async fn post_json(&self, url: &str, body: &Value) -> AppResult<WebhookResponse>;
}

/// [`WebhookClient`] backed by `reqwest`
#[derive(Clone)]
pub struct HttpWebhookClient {
    client: reqwest::Client,
}

impl HttpWebhookClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpWebhookClient {
    fn default() -> Self {
        Self::new(HTTP_CLIENT.clone())
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn post_json(&self, url: &str, body: &Value) -> AppResult<WebhookResponse> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|source| AppError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        // An unreadable body should not hide the status code
        let body = response.text().await.unwrap_or_default();
        debug!(url, status, "webhook responded");

        Ok(WebhookResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(WebhookResponse::new(200, "1").is_success());
        assert!(WebhookResponse::new(204, "").is_success());
        assert!(!WebhookResponse::new(199, "").is_success());
        assert!(!WebhookResponse::new(302, "").is_success());
        assert!(!WebhookResponse::new(500, "boom").is_success());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = HttpWebhookClient::new(reqwest::Client::builder().no_proxy().build().unwrap());
        // Port 9 (discard) on loopback is expected to refuse connections
        let result = client
            .post_json("http://127.0.0.1:9/hook", &serde_json::json!({"text": "x"}))
            .await;

        match result {
            Err(AppError::Transport { url, .. }) => assert_eq!(url, "http://127.0.0.1:9/hook"),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
