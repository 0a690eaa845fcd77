//! Batch forwarder.
//!
//! Collapses a batch of pending messages (plus re-announcements of batches
//! that failed earlier) into one card and POSTs it to the configured webhook.
//! Delivery is single-attempt; a failed batch is reported back to the caller,
//! which is expected to pass its id in `unsent_batches` on a later run.

use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::card::{BLANK_MESSAGE, MessageFormat, NO_MESSAGE_TEXT, field_text};
use crate::config::ForwarderConfig;
use crate::error::{AppError, AppResult};
use crate::external::{HttpWebhookClient, WebhookClient};
use crate::models::Message;

/// What a call to [`Forwarder::forward`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// Nothing to send, no request was made
    Skipped,
    /// The webhook accepted the card
    Delivered { status: u16, duration_ms: u64 },
}

/// Forwards message batches to a webhook
///
/// # Example
/// ```ignore
/// let config = ForwarderConfig::new("https://logs.example.com/view", "https://hooks.example.com/abc");
/// let forwarder = Forwarder::new(&config)?;
/// forwarder.forward(&messages, Some(42), &[40, 41]).await?;
/// ```
pub struct Forwarder {
    base_url: String,
    webhook_url: String,
    format: MessageFormat,
    client: Arc<dyn WebhookClient>,
}

impl std::fmt::Debug for Forwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forwarder")
            .field("base_url", &self.base_url)
            .field("webhook_url", &self.webhook_url)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Forwarder {
    /// Creates a forwarder using the shared HTTP client
    ///
    /// # Errors
    /// `AppError::Configuration` if `base_url` or `webhook_url` is missing or blank.
    pub fn new(config: &ForwarderConfig) -> AppResult<Self> {
        Self::with_client(config, Arc::new(HttpWebhookClient::default()))
    }

    /// Creates a forwarder that sends through `client`
    pub fn with_client(
        config: &ForwarderConfig,
        client: Arc<dyn WebhookClient>,
    ) -> AppResult<Self> {
        let base_url = required("forwarder.base_url", config.base_url.as_deref())?;
        let webhook_url = required("forwarder.webhook_url", config.webhook_url.as_deref())?;
        let format = MessageFormat::from_setting(config.message_format.as_deref());

        debug!(%webhook_url, %format, "forwarder configured");

        Ok(Self {
            base_url,
            webhook_url,
            format,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn message_format(&self) -> MessageFormat {
        self.format
    }

    /// Sends one card summarising `messages` and re-announcing `unsent_batches`
    ///
    /// Returns [`ForwardOutcome::Skipped`] without touching the network when
    /// both lists are empty.
    ///
    /// # Errors
    /// - `AppError::InvalidPayload` if the first message is not a JSON object
    /// - `AppError::Transport` if the webhook could not be reached
    /// - `AppError::Delivery` if the webhook answered with a non-2xx status
    pub async fn forward<M: Message>(
        &self,
        messages: &[M],
        batch_id: Option<i64>,
        unsent_batches: &[i64],
    ) -> AppResult<ForwardOutcome> {
        if messages.is_empty() && unsent_batches.is_empty() {
            debug!(?batch_id, "nothing to forward");
            return Ok(ForwardOutcome::Skipped);
        }

        let card = self.format_message(self.build_message(messages, batch_id, unsent_batches)?);

        let start = Instant::now();
        let response = self.client.post_json(&self.webhook_url, &card).await?;
        let duration_ms = start.elapsed().as_millis() as u64;

        if !response.is_success() {
            warn!(
                url = %self.webhook_url,
                status = response.status,
                ?batch_id,
                "webhook rejected batch"
            );
            return Err(AppError::Delivery {
                url: self.webhook_url.clone(),
                status: response.status,
                body: response.body,
            });
        }

        info!(
            ?batch_id,
            messages = messages.len(),
            resent = unsent_batches.len(),
            status = response.status,
            duration_ms,
            "batch forwarded"
        );

        Ok(ForwardOutcome::Delivered {
            status: response.status,
            duration_ms,
        })
    }

    /// Builds the composite MessageCard for a batch
    ///
    /// Starts from the first message's payload (or [`BLANK_MESSAGE`]), prefixes
    /// one "resending" line per unsent batch, each new line going on top, and
    /// wraps the result in a summary line when the batch holds several messages.
    pub fn build_message<M: Message>(
        &self,
        messages: &[M],
        batch_id: Option<i64>,
        unsent_batches: &[i64],
    ) -> AppResult<Map<String, Value>> {
        let payload = messages.first().map(|m| m.data()).unwrap_or(BLANK_MESSAGE);
        let mut composite = parse_card(payload)?;

        let has_text = composite.contains_key("text");
        let decorate = !unsent_batches.is_empty() || messages.len() > 1;
        // left as-is (even if `text` is not a string) when nothing is prepended
        if has_text && !decorate {
            return Ok(composite);
        }

        let text = match composite.get("text") {
            Some(value) => field_text(value),
            None => NO_MESSAGE_TEXT.to_string(),
        };

        let text = unsent_batches.iter().fold(text, |text, &id| {
            format!(
                "Resending previously failed {}  \n{}",
                self.batch_link(Some(id)),
                text
            )
        });

        let text = if messages.len() > 1 {
            format!(
                "{} log messages in {}  \nFirst message: {}",
                messages.len(),
                self.batch_link(batch_id),
                text
            )
        } else {
            text
        };

        composite.insert("text".to_string(), Value::String(text));
        Ok(composite)
    }

    /// Translates a composite into the configured wire format
    pub fn format_message(&self, composite: Map<String, Value>) -> Value {
        self.format.format(composite)
    }

    /// `[batch <id>](<base_url>?batch=<id>)`; an absent id renders empty
    fn batch_link(&self, batch_id: Option<i64>) -> String {
        let id = batch_id.map(|id| id.to_string()).unwrap_or_default();
        format!("[batch {id}]({}?batch={id})", self.base_url)
    }
}

fn required(key: &str, value: Option<&str>) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(AppError::configuration(key, "is required")),
    }
}

fn parse_card(payload: &str) -> AppResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(payload)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::InvalidPayload {
            reason: format!("message payload must be a JSON object, got {other}"),
        }),
    }
}
