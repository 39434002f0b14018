//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module assembles them
//! once at startup. The router is immutable for the process lifetime.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    AstralConfigTool, CheckHealthTool, ProofByUidTool, QueryProofsTool, ServerInfoTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CheckHealthTool::create_route(config.clone()))
        .with_route(ServerInfoTool::create_route(config.clone()))
        .with_route(QueryProofsTool::create_route(config.clone()))
        .with_route(ProofByUidTool::create_route(config.clone()))
        .with_route(AstralConfigTool::create_route(config))
}
