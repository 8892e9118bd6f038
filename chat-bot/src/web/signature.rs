//! Google Chat request signature verification.
//!
//! Google Chat signs each callback with HMAC-SHA256 over
//! `"{timestamp}.{body}"`, sending the timestamp in
//! `X-Google-Signature-Timestamp` and the hex digest in `X-Google-Signature`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the signing timestamp.
pub const TIMESTAMP_HEADER: &str = "X-Google-Signature-Timestamp";

/// Header carrying the hex-encoded HMAC-SHA256 signature.
pub const SIGNATURE_HEADER: &str = "X-Google-Signature";

/// Verify a Google Chat request signature.
///
/// # Arguments
///
/// * `timestamp` - The `X-Google-Signature-Timestamp` header value
/// * `signature` - The `X-Google-Signature` header value (hex)
/// * `body` - The raw request body, exactly as received
/// * `signing_key` - The shared Google Chat signing key
///
/// # Returns
///
/// `true` only if every input is present and the signature matches.
/// Missing inputs, a non-UTF-8 body, malformed hex and a wrong digest all
/// yield the same `false`.
pub fn verify_signature(timestamp: &str, signature: &str, body: &[u8], signing_key: &str) -> bool {
    if timestamp.is_empty() || signature.is_empty() || body.is_empty() || signing_key.is_empty() {
        warn!(
            has_timestamp = !timestamp.is_empty(),
            has_signature = !signature.is_empty(),
            has_body = !body.is_empty(),
            has_signing_key = !signing_key.is_empty(),
            "chat_signature_missing_fields"
        );
        return false;
    }

    let Ok(body) = std::str::from_utf8(body) else {
        warn!("chat_signature_body_not_utf8");
        return false;
    };

    let Ok(provided) = hex::decode(signature) else {
        warn!(signature_length = signature.len(), "chat_signature_invalid_hex");
        return false;
    };

    let mac = signed_message_mac(timestamp, body, signing_key);

    // verify_slice compares in constant time and rejects length mismatches.
    let valid = mac.verify_slice(&provided).is_ok();

    if !valid {
        warn!(actual_length = provided.len(), "chat_signature_mismatch");
    }

    valid
}

/// Compute the hex signature Google Chat would send for `body`.
pub fn compute_signature(timestamp: &str, body: &str, signing_key: &str) -> String {
    hex::encode(signed_message_mac(timestamp, body, signing_key).finalize().into_bytes())
}

/// HMAC state over the canonical signed message `"{timestamp}.{body}"`.
fn signed_message_mac(timestamp: &str, body: &str, signing_key: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(signing_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body.as_bytes());
    mac
}
