//! Webhook endpoint handlers.
//!
//! The chat endpoint runs the whole request pipeline inline:
//! 1. Check that a signing key is configured
//! 2. Verify the Google Chat signature over the raw body
//! 3. Parse and answer the event
//!
//! Every failure is resolved here into a status code and a JSON body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::event::{handle_event, EventError, Reply};
use crate::web::signature::{verify_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Request-level failures of the chat endpoint.
#[derive(Debug, Error)]
pub enum ChatBotError {
    #[error("Google Chat signing key is not set.")]
    SigningKeyMissing,

    #[error("Invalid signature.")]
    InvalidSignature,

    #[error("Invalid JSON format.")]
    InvalidJson(#[source] serde_json::Error),
}

impl From<EventError> for ChatBotError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::InvalidJson(e) => ChatBotError::InvalidJson(e),
        }
    }
}

impl ChatBotError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatBotError::SigningKeyMissing => StatusCode::INTERNAL_SERVER_ERROR,
            ChatBotError::InvalidSignature => StatusCode::UNAUTHORIZED,
            ChatBotError::InvalidJson(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ChatBotError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Google Chat Webhook
// =============================================================================

/// Google Chat webhook endpoint.
///
/// The body is taken as raw bytes so the signature is checked against
/// exactly what was sent, before any JSON parsing.
pub async fn chat_bot_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Reply>, ChatBotError> {
    let Some(signing_key) = state.config.signing_key() else {
        error!("chat_signing_key_not_configured");
        return Err(ChatBotError::SigningKeyMissing);
    };

    let timestamp = header_str(&headers, TIMESTAMP_HEADER);
    let signature = header_str(&headers, SIGNATURE_HEADER);

    info!(
        body_length = body.len(),
        has_timestamp = !timestamp.is_empty(),
        has_signature = !signature.is_empty(),
        "chat_webhook_received"
    );

    if !verify_signature(timestamp, signature, &body, signing_key) {
        warn!(timestamp = %timestamp, "chat_signature_invalid");
        return Err(ChatBotError::InvalidSignature);
    }

    let reply = handle_event(&body).map_err(|e| {
        warn!(error = %e, "chat_event_parse_failed");
        ChatBotError::from(e)
    })?;

    Ok(Json(reply))
}

/// Header value as a string; absent or non-visible-ASCII values read as "".
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ChatBotError::SigningKeyMissing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ChatBotError::InvalidSignature.status(), StatusCode::UNAUTHORIZED);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ChatBotError::InvalidJson(json_err).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_header_str() {
        let mut headers = HeaderMap::new();
        headers.insert("x-google-signature-timestamp", "1700000000".parse().unwrap());

        assert_eq!(header_str(&headers, TIMESTAMP_HEADER), "1700000000");
        assert_eq!(header_str(&headers, "x-google-SIGNATURE-timestamp"), "1700000000");
        assert_eq!(header_str(&headers, SIGNATURE_HEADER), "");
    }
}
