//! Astral MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing the Astral
//! location-attestation API as callable tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the main server handler, and
//!   the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **astral**: HTTP client for the Astral API
//!   - **tools**: Tool definitions, the registry/router, and the normalized
//!     result envelope every tool returns
//!
//! # Example
//!
//! ```rust,no_run
//! use astral_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
