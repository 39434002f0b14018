//! Transport layer for the MCP server.
//!
//! The host protocol runs over standard input/output; the transport handles
//! the connection lifecycle and delegates message processing to the MCP
//! server handler.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
