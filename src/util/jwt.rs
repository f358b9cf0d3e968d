//! JWT payload inspection **without signature verification**.
//!
//! The backend is the sole authority on token validity; the client decodes
//! the payload purely to learn who is logged in. A token that fails to
//! decode is treated as "no session", never as a fatal error.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

/// Identity claims decoded from an access token payload.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionClaims {
    /// `sub` claim, falling back to `user_id` (string or number).
    pub subject: Option<String>,
    /// `iat` claim, seconds since the Unix epoch.
    pub issued_at: Option<u64>,
    /// `exp` claim, seconds since the Unix epoch. Not enforced client-side.
    pub expires_at: Option<u64>,
    /// The full payload object, untouched.
    pub raw: Value,
}

/// Failure to read a compact JWT's payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not in compact three-segment form")]
    Malformed,
    #[error("payload is not valid base64url: {0}")]
    Encoding(String),
    #[error("payload is not a JSON object: {0}")]
    Payload(String),
}

/// Decode the payload segment of a compact JWT into [`SessionClaims`].
///
/// The signature is NOT checked and expiry is NOT enforced; this is a
/// display convenience only.
///
/// # Errors
///
/// Returns [`TokenError`] if the token is not three dot-separated segments
/// or its payload is not base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Result<SessionClaims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    let raw: Value =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))?;
    if !raw.is_object() {
        return Err(TokenError::Payload("expected a JSON object".to_owned()));
    }

    Ok(SessionClaims {
        subject: subject_claim(&raw),
        issued_at: raw.get("iat").and_then(Value::as_u64),
        expires_at: raw.get("exp").and_then(Value::as_u64),
        raw,
    })
}

fn subject_claim(raw: &Value) -> Option<String> {
    if let Some(Value::String(sub)) = raw.get("sub") {
        return Some(sub.clone());
    }
    match raw.get("user_id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}
