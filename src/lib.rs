//! VuOwma webhook forwarder
//!
//! Batches pending log messages into a single MessageCard or AdaptiveCard and
//! posts it to a chat-ops webhook.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};
pub use models::{Message, PendingMessage};
pub use services::{ForwardOutcome, Forwarder, MessageFormat};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
