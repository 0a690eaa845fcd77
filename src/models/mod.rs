//! Records supplied by the message store

mod message;

pub use message::{Message, PendingMessage};
