//! Typed Google Chat events.
//!
//! Google Chat posts loosely shaped JSON. Decoding happens in one place,
//! [`InboundEvent::from_value`], which fixes the precedence between the
//! shapes we understand. Anything else becomes [`InboundEvent::Unknown`].

use serde_json::{Map, Value};

/// Event type sent when the bot is added to a space.
pub const ADDED_TO_SPACE: &str = "ADDED_TO_SPACE";

/// A single chat event, classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// `{"type": "ADDED_TO_SPACE", ...}`
    AddedToSpace,
    /// `{"message": {"text": "..."}}`
    Message { text: String },
    /// `{"messagePayload": {"message": {"text": "..."}}}`
    NestedPayload { text: String },
    /// Any other document, including non-objects.
    Unknown,
}

impl InboundEvent {
    /// Classify a parsed document.
    ///
    /// A key holding `null` is treated as absent, and a missing or
    /// non-string `text` reads as the empty string.
    pub fn from_value(value: &Value) -> Self {
        let Some(doc) = value.as_object() else {
            return InboundEvent::Unknown;
        };

        if doc.get("type").and_then(Value::as_str) == Some(ADDED_TO_SPACE) {
            return InboundEvent::AddedToSpace;
        }

        if let Some(message) = field(doc, "message") {
            return InboundEvent::Message {
                text: message_text(message),
            };
        }

        if let Some(message) = field(doc, "messagePayload")
            .and_then(Value::as_object)
            .and_then(|payload| field(payload, "message"))
        {
            return InboundEvent::NestedPayload {
                text: message_text(message),
            };
        }

        InboundEvent::Unknown
    }

    /// Short name used in logs.
    pub fn kind(&self) -> EventKind {
        match self {
            InboundEvent::AddedToSpace => EventKind::AddedToSpace,
            InboundEvent::Message { .. } => EventKind::Message,
            InboundEvent::NestedPayload { .. } => EventKind::NestedPayload,
            InboundEvent::Unknown => EventKind::Unknown,
        }
    }
}

/// Event classification without the payload, for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    AddedToSpace,
    Message,
    NestedPayload,
    Unknown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::AddedToSpace => "added_to_space",
            EventKind::Message => "message",
            EventKind::NestedPayload => "nested_payload",
            EventKind::Unknown => "unknown",
        }
    }
}

fn field<'a>(doc: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|v| !v.is_null())
}

fn message_text(message: &Value) -> String {
    message
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
