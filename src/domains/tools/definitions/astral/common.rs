//! Common utilities shared across Astral tools.
//!
//! Per-tool argument validation and response formatting helpers. Validation
//! short-circuits before any network I/O: a failed check yields a
//! `validation_error` outcome and the remote API is never contacted.

use rmcp::model::{CallToolResult, Content};

use crate::domains::tools::outcome::ToolOutcome;

/// Default page size applied by the API when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 100;

/// Expected length of the hex portion of a prover address.
const PROVER_HEX_LEN: usize = 40;

/// Expected length of the hex portion of a proof uid (66 chars total).
const UID_HEX_LEN: usize = 64;

fn is_prefixed_hex(value: &str, hex_len: usize) -> bool {
    value.len() == hex_len + 2
        && value.starts_with("0x")
        && value[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check whether a string is a prover address: `0x` + 40 hex digits,
/// case-insensitive.
pub fn is_prover_address(value: &str) -> bool {
    is_prefixed_hex(value, PROVER_HEX_LEN)
}

/// Check whether a string is a location-proof uid: `0x` + 64 hex digits,
/// case-insensitive.
pub fn is_proof_uid(value: &str) -> bool {
    is_prefixed_hex(value, UID_HEX_LEN)
}

/// Validate a caller-supplied `limit`. Out-of-range values are rejected, not
/// clamped.
pub fn validate_limit(limit: i64) -> Result<(), ToolOutcome> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(ToolOutcome::validation_error(
            format!(
                "limit must be between 1 and {} (got {})",
                MAX_LIMIT, limit
            ),
            "limit",
            "integer in [1, 100]",
        ))
    }
}

/// Validate a caller-supplied `offset`.
pub fn validate_offset(offset: i64) -> Result<(), ToolOutcome> {
    if offset >= 0 {
        Ok(())
    } else {
        Err(ToolOutcome::validation_error(
            format!("offset must be non-negative (got {})", offset),
            "offset",
            "integer >= 0",
        ))
    }
}

/// Validate a caller-supplied `prover` address filter.
pub fn validate_prover(prover: &str) -> Result<(), ToolOutcome> {
    if is_prover_address(prover) {
        Ok(())
    } else {
        Err(ToolOutcome::validation_error(
            format!("prover is not a valid address: '{}'", prover),
            "prover",
            "^0x[a-fA-F0-9]{40}$",
        ))
    }
}

/// Validate a caller-supplied proof `uid`.
pub fn validate_uid(uid: &str) -> Result<(), ToolOutcome> {
    if is_proof_uid(uid) {
        Ok(())
    } else {
        Err(ToolOutcome::validation_error(
            format!("uid is not a valid location proof identifier: '{}'", uid),
            "uid",
            "^0x[a-fA-F0-9]{64}$",
        ))
    }
}

/// Render an outcome as a tool result: text summary + structured content.
///
/// Failures are still valid tool results (`is_error: false`): the envelope's
/// own `success` field carries the verdict, and callers branch on it.
pub fn outcome_result(summary: impl Into<String>, outcome: &ToolOutcome) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(summary.into())],
        structured_content: Some(serde_json::to_value(outcome).unwrap()),
        is_error: Some(false),
        meta: None,
    }
}
