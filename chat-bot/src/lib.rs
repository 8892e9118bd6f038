//! Google Chat bot webhook.
//!
//! Receives Google Chat event callbacks, authenticates them with the
//! HMAC-SHA256 signature Google attaches, and answers with a short text reply.
//!
//! ## Architecture
//!
//! ```text
//! POST /chat-bot → signature check → event decode → Reply {"text": ...}
//! ```

pub mod config;
pub mod event;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use event::{handle_event, InboundEvent, Reply};
pub use web::{build_router, verify_signature, AppState};
