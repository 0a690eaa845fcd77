//! Message batch forwarding to chat-ops webhooks.

mod card;
mod forwarder;

pub use card::{BLANK_MESSAGE, MessageFormat, NO_MESSAGE_TEXT};
pub use forwarder::{ForwardOutcome, Forwarder};
