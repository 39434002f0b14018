//! Astral client error types.

use thiserror::Error;

/// Maximum number of response-body characters carried in a status error.
pub const RESPONSE_TEXT_CAP: usize = 500;

/// Errors raised by a single Astral API call.
///
/// Each variant is distinguishable so the response normalizer can map it to
/// exactly one failure kind without parsing messages.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request exceeded the configured timeout budget.
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout, in seconds.
        timeout_secs: u64,
    },

    /// The API answered with a non-2xx status.
    #[error("API returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated to [`RESPONSE_TEXT_CAP`] characters.
        body: String,
    },

    /// Any other transport-level failure (DNS, connect, malformed body, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Truncate a response body for inclusion in a [`ClientError::Status`].
pub fn truncate_body(body: &str) -> String {
    body.chars().take(RESPONSE_TEXT_CAP).collect()
}
