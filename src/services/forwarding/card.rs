//! Card shapes accepted by the webhook.
//!
//! Payloads are stored in the legacy MessageCard shape (top-level `title` and
//! `text`). Endpoints that only understand AdaptiveCards get the same content
//! wrapped in a `message` envelope.

use serde_json::{Map, Value, json};

/// Payload used when a batch has no message of its own (re-announcements only)
pub const BLANK_MESSAGE: &str = r#"{"@type":"MessageCard","@context":"https://schema.org/extensions","themeColor":"0072C6","title":"VuOwma Message","text":""}"#;

/// Substituted when a payload carries no `text`
pub const NO_MESSAGE_TEXT: &str = "--no message provided--";

const ADAPTIVE_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
const ADAPTIVE_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const ADAPTIVE_VERSION: &str = "1.2";

/// Wire format of the outgoing card, fixed for a forwarder's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    #[default]
    MessageCard,
    AdaptiveCard,
}

impl MessageFormat {
    /// Interpret the `message_format` setting
    ///
    /// Case-insensitive and whitespace-trimmed. Only `messagecard` selects
    /// [`MessageFormat::MessageCard`]; every other value means adaptive cards.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            None => MessageFormat::MessageCard,
            Some(raw) if raw.trim().eq_ignore_ascii_case("messagecard") => {
                MessageFormat::MessageCard
            }
            Some(_) => MessageFormat::AdaptiveCard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormat::MessageCard => "messagecard",
            MessageFormat::AdaptiveCard => "adaptivecard",
        }
    }

    /// Translate a composite MessageCard into this format
    pub fn format(&self, composite: Map<String, Value>) -> Value {
        match self {
            MessageFormat::MessageCard => Value::Object(composite),
            MessageFormat::AdaptiveCard => to_adaptive_card(&composite),
        }
    }
}

impl std::fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a card field as plain text; strings are taken without quotes
pub(crate) fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn to_adaptive_card(composite: &Map<String, Value>) -> Value {
    let mut body = Vec::with_capacity(2);

    let title = composite.get("title").map(field_text).unwrap_or_default();
    if !title.is_empty() {
        body.push(json!({
            "type": "TextBlock",
            "text": format!("**{title}**"),
            "size": "large",
        }));
    }

    body.push(json!({
        "type": "TextBlock",
        "text": composite.get("text").cloned().unwrap_or(Value::Null),
        "wrap": true,
    }));

    json!({
        "type": "message",
        "attachments": [{
            "contentType": ADAPTIVE_CONTENT_TYPE,
            "contentUrl": null,
            "content": {
                "$schema": ADAPTIVE_SCHEMA,
                "type": "AdaptiveCard",
                "version": ADAPTIVE_VERSION,
                "body": body,
                "msteams": { "width": "Full" },
            },
        }],
    })
}
