use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;

use crate::error::ApiError;

/// Decode the payload of a JWT for display purposes only. No signature
/// verification happens client-side; the result must never feed an
/// authorization decision; the backend re-checks everything.
pub fn claims_for_display(token: &str) -> Result<Value, ApiError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(ApiError::decode("token is not in JWT form")),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ApiError::decode(format!("token payload is not base64url: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::decode(format!("token payload is not JSON: {e}")))
}

/// Fish a single string claim out of decoded claims, if present.
pub fn claim_str<'a>(claims: &'a Value, name: &str) -> Option<&'a str> {
    claims.get(name).and_then(Value::as_str)
}
