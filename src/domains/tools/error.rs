//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool dispatch.
///
/// Note that tool *outcomes* (validation failures, API errors, ...) are not
/// errors: they are normalized envelopes returned as values. This type covers
/// the dispatch surface itself plus the health check's hard-failure path.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The arguments could not be deserialized into the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool execution failed hard (health check only).
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}
