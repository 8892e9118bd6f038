//! Chat event handling.
//!
//! Turns an already-authenticated request body into a [`Reply`].
//!
//! ```text
//! raw body → serde_json::Value → InboundEvent → Reply
//! ```

pub mod reply;
pub mod types;

use thiserror::Error;
use tracing::info;

pub use reply::{Reply, ReplyKind};
pub use types::{EventKind, InboundEvent};

/// Errors produced while handling an event body.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parse, classify and answer a chat event.
///
/// Only a body that is not JSON fails; every JSON document gets a reply.
pub fn handle_event(body: &[u8]) -> Result<Reply, EventError> {
    let document: serde_json::Value = serde_json::from_slice(body)?;

    info!(event = %document, "chat_event_received");

    let event = InboundEvent::from_value(&document);
    let kind = ReplyKind::for_event(&event);

    info!(
        event_kind = event.kind().as_str(),
        reply_kind = kind.as_str(),
        "chat_event_handled"
    );

    Ok(Reply::new(kind.text()))
}
