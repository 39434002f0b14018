//! Tools domain module.
//!
//! Everything the server exposes as callable tools lives here.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the MCP transport
//! - `registry.rs` - Central tool catalog and dispatch
//! - `outcome.rs` - The normalized result envelope every tool returns
//! - `error.rs` - Dispatch-level error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/astral/`
//! 2. Define params, `execute()`, `to_tool()`, and `create_route()`
//! 3. Export in `definitions/astral/mod.rs`
//! 4. Add the route in `router.rs` and the entry in `registry.rs`

pub mod definitions;
mod error;
pub mod outcome;
pub mod registry;
pub mod router;

pub use error::ToolError;
pub use outcome::{CallMetadata, FailureKind, ToolOutcome};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
