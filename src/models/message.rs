//! Pending log messages.
//!
//! The store that persists messages and tracks unsent batches lives outside
//! this crate. All the forwarder needs from a record is its raw payload: a
//! JSON-encoded card with at least a `text` field and optionally a `title`.

use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Read-only view of a stored message
pub trait Message {
    /// The serialized card payload
    fn data(&self) -> &str;
}

impl<T: Message + ?Sized> Message for &T {
    fn data(&self) -> &str {
        (**self).data()
    }
}

/// A message as handed over by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMessage {
    data: String,
}

impl PendingMessage {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Build a message from a decoded JSON value
    ///
    /// Strings are taken as already-serialized payloads; objects are
    /// serialized. Anything else cannot be a card.
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::String(data) => Ok(Self { data }),
            Value::Object(_) => Ok(Self {
                data: serde_json::to_string(&value)?,
            }),
            other => Err(AppError::InvalidPayload {
                reason: format!("expected a card object or a JSON string, got {other}"),
            }),
        }
    }

    /// Decode a JSON array of payloads, as read by the CLI driver
    pub fn list_from_json(source: &str) -> AppResult<Vec<Self>> {
        let values: Vec<Value> = serde_json::from_str(source)?;
        values.into_iter().map(Self::from_value).collect()
    }
}

impl Message for PendingMessage {
    fn data(&self) -> &str {
        &self.data
    }
}
