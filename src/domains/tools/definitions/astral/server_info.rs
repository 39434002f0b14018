//! Server info tool.
//!
//! Pure and local: reports this server's identity, its capability list, and
//! whether an API key is configured. Never touches the network, always
//! succeeds, idempotent.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use crate::core::config::Config;
use crate::domains::tools::registry::ToolRegistry;

/// Parameters for the server info tool. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ServerInfoParams {}

/// Server info tool.
#[derive(Debug, Clone)]
pub struct ServerInfoTool;

impl ServerInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_server_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get information about this MCP server: name, version, capability list, and whether an Astral API key is configured. Local and idempotent; makes no network call.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool. Infallible and purely local.
    pub fn execute(config: &Config) -> CallToolResult {
        let payload = serde_json::json!({
            "name": config.server.name,
            "version": config.server.version,
            "description": "MCP server for querying Astral location attestations",
            "api_key_configured": config.credentials.api_key_configured(),
            "astral_health_endpoint": config.astral.health_url(),
            "capabilities": ToolRegistry::tool_names(),
        });

        CallToolResult {
            content: vec![Content::text(format!(
                "{} v{}",
                config.server.name, config.server.version
            ))],
            structured_content: Some(payload),
            is_error: Some(false),
            meta: None,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ServerInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the MCP router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            async move { Ok(Self::execute(&config)) }.boxed()
        })
    }
}

impl Default for ServerInfoTool {
    fn default() -> Self {
        Self::new()
    }
}
