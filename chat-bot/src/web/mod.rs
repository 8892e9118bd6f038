//! Web server module for the Google Chat webhook.
//!
//! # Endpoints
//!
//! - `POST /chat-bot` - Verifies and answers Google Chat events
//! - `GET /health` - Returns 200 if the server is running

pub mod handlers;
pub mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{chat_bot_webhook, health, AppState, ChatBotError, ErrorResponse, HealthResponse};
pub use signature::{compute_signature, verify_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Path Google Chat posts events to.
pub const CHAT_BOT_PATH: &str = "/chat-bot";

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(CHAT_BOT_PATH, post(chat_bot_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
