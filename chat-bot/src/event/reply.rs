//! Reply text selection.

use serde::Serialize;

use super::types::InboundEvent;

pub const WELCOME_TEXT: &str =
    "Thanks for adding me to this space! Say 'hello' or 'help' to get started.";
pub const GREETING_TEXT: &str = "Hello there! How can I help you today? 👋";
pub const HELP_TEXT: &str = "I am a simple bot. You can say 'hello' or 'help'!";
/// Fallback for direct `message` events.
pub const MESSAGE_ACK_TEXT: &str = "I received your message.";
/// Fallback for `messagePayload` events.
pub const PAYLOAD_ACK_TEXT: &str = "Thanks for the message.";
pub const UNHANDLED_TEXT: &str = "I'm a bot and can't process that event type yet.";

/// Which canned reply was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Welcome,
    Greeting,
    Help,
    MessageAck,
    PayloadAck,
    Unhandled,
}

impl ReplyKind {
    /// Pick the reply for a classified event.
    pub fn for_event(event: &InboundEvent) -> Self {
        match event {
            InboundEvent::AddedToSpace => ReplyKind::Welcome,
            InboundEvent::Message { text } => keyword_reply(text, ReplyKind::MessageAck),
            InboundEvent::NestedPayload { text } => keyword_reply(text, ReplyKind::PayloadAck),
            InboundEvent::Unknown => ReplyKind::Unhandled,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ReplyKind::Welcome => WELCOME_TEXT,
            ReplyKind::Greeting => GREETING_TEXT,
            ReplyKind::Help => HELP_TEXT,
            ReplyKind::MessageAck => MESSAGE_ACK_TEXT,
            ReplyKind::PayloadAck => PAYLOAD_ACK_TEXT,
            ReplyKind::Unhandled => UNHANDLED_TEXT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKind::Welcome => "welcome",
            ReplyKind::Greeting => "greeting",
            ReplyKind::Help => "help",
            ReplyKind::MessageAck => "message_ack",
            ReplyKind::PayloadAck => "payload_ack",
            ReplyKind::Unhandled => "unhandled",
        }
    }
}

/// Synchronous response body returned to Google Chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn for_event(event: &InboundEvent) -> Self {
        Reply::new(ReplyKind::for_event(event).text())
    }
}

/// Case-insensitive keyword match; "hello" is checked before "help".
fn keyword_reply(text: &str, fallback: ReplyKind) -> ReplyKind {
    let text = text.to_lowercase();
    if text.contains("hello") {
        ReplyKind::Greeting
    } else if text.contains("help") {
        ReplyKind::Help
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> InboundEvent {
        InboundEvent::Message {
            text: text.to_string(),
        }
    }

    fn nested(text: &str) -> InboundEvent {
        InboundEvent::NestedPayload {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_welcome() {
        assert_eq!(Reply::for_event(&InboundEvent::AddedToSpace).text, WELCOME_TEXT);
    }

    #[test]
    fn test_message_keywords() {
        assert_eq!(Reply::for_event(&message("Hello there")).text, GREETING_TEXT);
        assert_eq!(Reply::for_event(&message("need HELP please")).text, HELP_TEXT);
        assert_eq!(Reply::for_event(&message("just chatting")).text, MESSAGE_ACK_TEXT);
        assert_eq!(Reply::for_event(&message("")).text, MESSAGE_ACK_TEXT);
    }

    #[test]
    fn test_hello_checked_before_help() {
        assert_eq!(Reply::for_event(&message("help me say hello")).text, GREETING_TEXT);
    }

    #[test]
    fn test_nested_keywords() {
        assert_eq!(Reply::for_event(&nested("hello")).text, GREETING_TEXT);
        assert_eq!(Reply::for_event(&nested("Help!")).text, HELP_TEXT);
        assert_eq!(Reply::for_event(&nested("just chatting")).text, PAYLOAD_ACK_TEXT);
    }

    #[test]
    fn test_reply_kind_for_event() {
        assert_eq!(ReplyKind::for_event(&message("hello")), ReplyKind::Greeting);
        assert_eq!(ReplyKind::for_event(&message("chat")), ReplyKind::MessageAck);
        assert_eq!(ReplyKind::for_event(&nested("chat")), ReplyKind::PayloadAck);
        assert_eq!(ReplyKind::for_event(&InboundEvent::Unknown).as_str(), "unhandled");
    }

    #[test]
    fn test_unhandled() {
        assert_eq!(Reply::for_event(&InboundEvent::Unknown).text, UNHANDLED_TEXT);
    }

    #[test]
    fn test_reply_serializes_as_text_object() {
        let json = serde_json::to_value(Reply::new("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hi"}));
    }
}
