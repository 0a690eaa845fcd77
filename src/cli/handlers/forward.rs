//! Forward command handler
//!
//! Reads one batch from a file or stdin and hands it to the [`Forwarder`].

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::{error, info};

use crate::cli::validation::STDIN_MARKER;
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::external::{HttpWebhookClient, build_http_client};
use crate::models::PendingMessage;
use crate::services::{ForwardOutcome, Forwarder};

/// Arguments of `vuowma forward`
#[derive(Debug, Clone)]
pub struct ForwardArgs<'a> {
    pub messages: &'a Path,
    pub batch_id: Option<i64>,
    pub unsent: &'a [i64],
    pub dry_run: bool,
}

pub struct ForwardCommandHandler {
    forwarder: Forwarder,
}

impl ForwardCommandHandler {
    /// Build the handler with an HTTP client configured from `[http]`
    pub fn new(config: &Settings) -> AppResult<Self> {
        let client = HttpWebhookClient::new(build_http_client(&config.http)?);
        Ok(Self::with_forwarder(Forwarder::with_client(
            &config.forwarder,
            Arc::new(client),
        )?))
    }

    pub fn with_forwarder(forwarder: Forwarder) -> Self {
        Self { forwarder }
    }

    pub async fn execute(&self, args: ForwardArgs<'_>) -> AppResult<()> {
        let source = read_source(args.messages).await?;
        let messages = PendingMessage::list_from_json(&source)?;
        info!(
            count = messages.len(),
            batch_id = ?args.batch_id,
            unsent = ?args.unsent,
            "batch loaded"
        );

        if args.dry_run {
            println!("{}", self.preview(&messages, args.batch_id, args.unsent)?);
            return Ok(());
        }

        match self
            .forwarder
            .forward(&messages, args.batch_id, args.unsent)
            .await
        {
            Ok(ForwardOutcome::Skipped) => {
                info!("no messages and no unsent batches, nothing sent");
                Ok(())
            }
            Ok(ForwardOutcome::Delivered { status, .. }) => {
                info!(status, "delivered");
                Ok(())
            }
            Err(e) => {
                if let Some(id) = args.batch_id {
                    error!(batch_id = id, "batch not delivered; pass it with --unsent on the next run");
                }
                Err(e)
            }
        }
    }

    /// Pretty-printed card that `execute` would POST, or a note when skipped
    pub fn preview(
        &self,
        messages: &[PendingMessage],
        batch_id: Option<i64>,
        unsent: &[i64],
    ) -> AppResult<String> {
        if messages.is_empty() && unsent.is_empty() {
            return Ok("nothing to send".to_string());
        }

        let composite = self.forwarder.build_message(messages, batch_id, unsent)?;
        let card: Value = self.forwarder.format_message(composite);
        Ok(serde_json::to_string_pretty(&card)?)
    }
}

async fn read_source(path: &Path) -> AppResult<String> {
    if path == Path::new(STDIN_MARKER) {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .map_err(|source| AppError::Io {
                context: "reading messages from stdin".to_string(),
                source,
            })?;
        return Ok(buffer);
    }

    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::Io {
            context: format!("reading messages from {}", path.display()),
            source,
        })
}
