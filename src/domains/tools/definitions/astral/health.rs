//! Astral API health check tool.
//!
//! Unlike every other tool, this one raises: any failure surfaces as a
//! protocol-level error rather than a normalized failure envelope. A caller
//! that sees this tool fail must treat the API as unavailable.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config::Config;
use crate::domains::astral::{AstralClient, CallOutcome};
use crate::domains::tools::outcome::ToolOutcome;

/// Parameters for the health check tool. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CheckHealthParams {}

/// Astral API health check tool.
#[derive(Debug, Clone)]
pub struct CheckHealthTool;

impl CheckHealthTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "check_astral_api_health";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check the health status of the Astral API. Verifies connectivity and service availability. Fails hard (raises a protocol error) when the API is unreachable, times out, or answers with a non-2xx status.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the health check.
    ///
    /// Returns `Err` on any failure; this is the tool's contract, not an
    /// implementation accident.
    pub async fn execute(config: &Config) -> Result<CallToolResult, McpError> {
        let endpoint = config.astral.health_url();
        info!("Checking Astral API health at: {}", endpoint);

        let client = AstralClient::new(config);

        match client.get(&endpoint, &[], false).await {
            Ok(CallOutcome::Success {
                status,
                elapsed_ms,
                body,
            }) => {
                info!("Health check successful ({})", status);
                let payload = serde_json::json!({
                    "status": "healthy",
                    "endpoint": endpoint,
                    "response_code": status,
                    "response_time_ms": elapsed_ms,
                    "api_data": body,
                });
                Ok(CallToolResult {
                    content: vec![Content::text(format!(
                        "Astral API is healthy ({})",
                        endpoint
                    ))],
                    structured_content: Some(payload),
                    is_error: Some(false),
                    meta: None,
                })
            }
            // The health endpoint is not a by-id lookup, so a 404 outcome
            // cannot occur; a real 404 arrives as a status error below.
            Ok(CallOutcome::NotFound { .. }) => Err(McpError::internal_error(
                "Health endpoint reported not found".to_string(),
                None,
            )),
            Err(e) => {
                let outcome = ToolOutcome::from_client_error(e);
                error!("Health check failed: {}", outcome.message());
                Err(McpError::internal_error(
                    format!("Health check failed: {}", outcome.message()),
                    serde_json::to_value(&outcome).ok(),
                ))
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CheckHealthParams>(),
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
            async move { Self::execute(&config).await }.boxed()
        })
    }
}

impl Default for CheckHealthTool {
    fn default() -> Self {
        Self::new()
    }
}
