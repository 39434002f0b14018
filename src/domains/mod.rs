//! Domain modules organized by bounded context.
//!
//! - `astral`: outbound HTTP client for the Astral API
//! - `tools`: the tool surface exposed to MCP clients

pub mod astral;
pub mod tools;
