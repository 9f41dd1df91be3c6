//! Local credential inspection.
//!
//! The session credential is a signed token of three dot-separated
//! segments. We never verify the signature here (the server does that);
//! we only decode the payload segment to read the `exp` claim and decide
//! whether the credential is still worth presenting.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use thiserror::Error;

/// Reasons a stored credential could not be decoded locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("credential does not consist of three segments")]
    MalformedStructure,
    #[error("payload segment is not valid base64url: {0}")]
    Base64(String),
    #[error("payload segment is not valid JSON: {0}")]
    Json(String),
    #[error("payload has no integer 'exp' claim")]
    MissingExp,
    #[error("'exp' claim is out of range")]
    ExpOutOfRange,
}

/// Decodes the expiry instant from a credential without verifying it.
///
/// The payload (second) segment is base64url-encoded JSON carrying an
/// `exp` claim in seconds since the epoch.
pub fn decode_credential_expiry(token: &str) -> Result<DateTime<Utc>, DecodeError> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(DecodeError::MalformedStructure),
    };

    // Tokens are emitted without padding, but tolerate padded input.
    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    let claims: Value =
        serde_json::from_slice(&raw).map_err(|e| DecodeError::Json(e.to_string()))?;

    let exp = claims
        .get("exp")
        .and_then(Value::as_i64)
        .ok_or(DecodeError::MissingExp)?;

    exp.checked_mul(1000)
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
        .ok_or(DecodeError::ExpOutOfRange)
}

/// Returns whether the credential's expiry instant lies before `now`.
pub fn is_expired(token: &str, now: DateTime<Utc>) -> Result<bool, DecodeError> {
    Ok(decode_credential_expiry(token)? < now)
}
