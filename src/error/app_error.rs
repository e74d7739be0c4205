use serde::Deserialize;
use thiserror::Error;

use crate::model::order::OrderStatus;

/// Structured error body returned by the backend on failed requests.
/// `error` must be present for the body to count as structured; `detail`
/// is optional in practice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub detail: String,
}

/// Client error taxonomy.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401 from any call: the session is invalid and has been cleared.
    /// Callers must not retry.
    #[error("session is no longer valid")]
    Unauthorized,

    /// Form-level check failed before any network call was made.
    #[error("validation failed: {field}")]
    Validation { field: String },

    /// Non-2xx, non-401 response from the backend.
    #[error("remote error ({status}): {error}")]
    Remote {
        status: u16,
        error: String,
        detail: String,
    },

    /// Network or timeout failure before a response was received.
    #[error("connection failure: {0}")]
    Transport(String),

    /// A 2xx response whose body did not decode as the declared type.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Order workflow gate refused the transition; nothing was sent.
    #[error("illegal order status transition: {from:?} -> {to:?}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    /// An identical mutation is already in flight.
    #[error("duplicate request in flight: {0}")]
    DuplicateRequest(String),
}

impl ApiError {
    /// Classify a non-2xx response. 401 is the universal session-invalid
    /// signal; anything else is decoded as `{error, detail}` when possible,
    /// otherwise synthesized from the status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => ApiError::Remote {
                status,
                error: parsed.error,
                detail: parsed.detail,
            },
            Err(_) => ApiError::Remote {
                status,
                error: format!("request failed with status {}", status),
                detail: body.to_string(),
            },
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }
}
