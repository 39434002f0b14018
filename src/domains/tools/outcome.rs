//! Normalized tool results.
//!
//! Every tool call produces exactly one [`ToolOutcome`]: either a success
//! envelope carrying the remote payload plus call metadata, or a failure
//! envelope with a machine-readable kind and a stable `details` map. Callers
//! branch on `error` and the per-kind detail keys (`status_code`,
//! `response_text`, `timeout_seconds`, `attempted_uid`, ...) rather than
//! parsing messages.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domains::astral::ClientError;

/// Failure classification for normalized results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Caller supplied malformed or out-of-range input. Local and
    /// non-retryable; no network call was made.
    ValidationError,
    /// The remote call exceeded the configured timeout budget.
    TimeoutError,
    /// The remote returned a non-2xx status not otherwise classified.
    ApiError,
    /// The remote explicitly reported the requested resource absent.
    NotFound,
    /// Anything else, including unclassified transport faults.
    UnexpectedError,
}

impl FailureKind {
    /// The wire name of this kind, as serialized into the `error` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::TimeoutError => "timeout_error",
            Self::ApiError => "api_error",
            Self::NotFound => "not_found",
            Self::UnexpectedError => "unexpected_error",
        }
    }
}

/// Metadata attached to successful calls: status code, round-trip time, and
/// the echoed request parameters.
#[derive(Debug, Clone, Serialize)]
pub struct CallMetadata {
    /// HTTP status code of the remote response.
    pub status_code: u16,

    /// Round-trip time in milliseconds, when measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,

    /// Echoed request parameters (query mapping, uid, ...).
    #[serde(flatten)]
    pub echo: Map<String, Value>,
}

impl CallMetadata {
    /// Metadata with no echoed parameters.
    pub fn new(status_code: u16, response_time_ms: Option<u64>) -> Self {
        Self {
            status_code,
            response_time_ms,
            echo: Map::new(),
        }
    }

    /// Attach an echoed request parameter.
    pub fn echo(mut self, key: &str, value: Value) -> Self {
        self.echo.insert(key.to_string(), value);
        self
    }
}

/// The uniform envelope every tool returns.
///
/// Serializes as `{"success": true, "data": ..., "metadata": {...}}` or
/// `{"success": false, "error": "<kind>", "message": "...", "details": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    /// The remote call succeeded.
    Success {
        success: bool,
        data: Value,
        metadata: CallMetadata,
    },

    /// The call failed; the invocation itself still returns normally.
    Failure {
        success: bool,
        error: FailureKind,
        message: String,
        details: Map<String, Value>,
    },
}

impl ToolOutcome {
    /// Build a success envelope.
    pub fn success(data: Value, metadata: CallMetadata) -> Self {
        Self::Success {
            success: true,
            data,
            metadata,
        }
    }

    /// Build a failure envelope.
    pub fn failure(kind: FailureKind, message: impl Into<String>, details: Map<String, Value>) -> Self {
        Self::Failure {
            success: false,
            error: kind,
            message: message.into(),
            details,
        }
    }

    /// Build a `validation_error` naming the offending parameter and the
    /// expected format.
    pub fn validation_error(
        message: impl Into<String>,
        parameter: &str,
        expected: &str,
    ) -> Self {
        let mut details = Map::new();
        details.insert("parameter".to_string(), Value::String(parameter.to_string()));
        details.insert("expected".to_string(), Value::String(expected.to_string()));
        Self::failure(FailureKind::ValidationError, message, details)
    }

    /// Normalize a client failure into the matching failure kind.
    pub fn from_client_error(error: ClientError) -> Self {
        match error {
            ClientError::Timeout { timeout_secs } => {
                let mut details = Map::new();
                details.insert("timeout_seconds".to_string(), Value::from(timeout_secs));
                Self::failure(
                    FailureKind::TimeoutError,
                    format!("Request timed out after {} seconds", timeout_secs),
                    details,
                )
            }
            ClientError::Status { status, body } => {
                let mut details = Map::new();
                details.insert("status_code".to_string(), Value::from(status));
                details.insert("response_text".to_string(), Value::String(body));
                Self::failure(
                    FailureKind::ApiError,
                    format!("Astral API returned status {}", status),
                    details,
                )
            }
            ClientError::Transport(e) => {
                let mut details = Map::new();
                details.insert("reason".to_string(), Value::String(e.to_string()));
                Self::failure(
                    FailureKind::UnexpectedError,
                    format!("Unexpected transport failure: {}", e),
                    details,
                )
            }
        }
    }

    /// The human-readable message. Empty for success envelopes.
    pub fn message(&self) -> &str {
        match self {
            Self::Failure { message, .. } => message,
            Self::Success { .. } => "",
        }
    }

    /// Whether this outcome is a success envelope.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure kind, if this is a failure envelope.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure { error, .. } => Some(*error),
            Self::Success { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization_shape() {
        let outcome = ToolOutcome::success(
            serde_json::json!({ "proofs": [] }),
            CallMetadata::new(200, Some(42)).echo("query", serde_json::json!({ "limit": 5 })),
        );
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["proofs"], serde_json::json!([]));
        assert_eq!(value["metadata"]["status_code"], 200);
        assert_eq!(value["metadata"]["response_time_ms"], 42);
        assert_eq!(value["metadata"]["query"]["limit"], 5);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_validation_error_shape() {
        let outcome = ToolOutcome::validation_error(
            "limit must be between 1 and 100",
            "limit",
            "integer in [1, 100]",
        );
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "validation_error");
        assert_eq!(value["details"]["parameter"], "limit");
        assert_eq!(value["details"]["expected"], "integer in [1, 100]");
    }

    #[test]
    fn test_timeout_normalization() {
        let outcome = ToolOutcome::from_client_error(ClientError::Timeout { timeout_secs: 30 });
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["error"], "timeout_error");
        assert_eq!(value["details"]["timeout_seconds"], 30);
    }

    #[test]
    fn test_status_normalization() {
        let outcome = ToolOutcome::from_client_error(ClientError::Status {
            status: 503,
            body: "unavailable".to_string(),
        });
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["error"], "api_error");
        assert_eq!(value["details"]["status_code"], 503);
        assert_eq!(value["details"]["response_text"], "unavailable");
    }

    #[test]
    fn test_failure_kind_wire_names() {
        assert_eq!(FailureKind::ValidationError.as_str(), "validation_error");
        assert_eq!(FailureKind::TimeoutError.as_str(), "timeout_error");
        assert_eq!(FailureKind::ApiError.as_str(), "api_error");
        assert_eq!(FailureKind::NotFound.as_str(), "not_found");
        assert_eq!(FailureKind::UnexpectedError.as_str(), "unexpected_error");
        assert_eq!(
            serde_json::to_value(FailureKind::NotFound).unwrap(),
            serde_json::json!("not_found")
        );
    }
}
