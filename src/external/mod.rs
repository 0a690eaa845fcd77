//! Outbound HTTP plumbing

pub mod client;
pub mod webhook;

pub use client::{HTTP_CLIENT, build_http_client};
pub use webhook::{HttpWebhookClient, WebhookClient, WebhookResponse};
