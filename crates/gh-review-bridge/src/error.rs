//! Bridge error taxonomy
//!
//! The host answers failed commands with untyped payloads (usually a bare
//! string). They are classified exactly once, in [`BridgeError::from_rejection`],
//! so the rest of the application matches on variants instead of text.

use serde_json::Value;
use thiserror::Error;

/// Marker the host embeds in a rejection while the user has not yet approved
/// the device login
const AUTHORIZATION_PENDING: &str = "authorization_pending";

/// Failure of a typed bridge call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Device login not approved yet; poll again later
    #[error("authorization pending")]
    AuthorizationPending,

    /// The host rejected the command (denied, expired, GitHub error, ...)
    #[error("{message}")]
    Rejected { command: String, message: String },

    /// The bridge itself failed (host not running, connection dropped, ...)
    #[error("Bridge error: {0}")]
    Transport(String),

    /// The host answered with a payload that does not match the command
    #[error("Unexpected response to {command}: {message}")]
    Decode { command: String, message: String },
}

impl BridgeError {
    /// Classify an untyped rejection payload returned for `command`
    pub fn from_rejection(command: &str, payload: &Value) -> Self {
        let message = rejection_message(payload);
        if message.contains(AUTHORIZATION_PENDING) {
            return Self::AuthorizationPending;
        }
        Self::Rejected {
            command: command.to_string(),
            message,
        }
    }

    /// Whether the same call may simply be retried on the next tick
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::AuthorizationPending)
    }
}

/// Best-effort human message from an error payload
///
/// Strings are used verbatim; objects contribute their `message`, `error`
/// or `error_description` field; anything else is rendered as JSON.
fn rejection_message(payload: &Value) -> String {
    match payload {
        Value::String(message) => message.clone(),
        Value::Object(fields) => ["message", "error", "error_description"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| payload.to_string()),
        Value::Null => "Unknown error".to_string(),
        other => other.to_string(),
    }
}
