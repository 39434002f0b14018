//! Astral API configuration fetch tool.
//!
//! Retrieves the remote API's configuration document (supported chains,
//! schema information, limits). Takes no arguments.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Map;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::astral::{AstralClient, CallOutcome};
use crate::domains::tools::outcome::{CallMetadata, FailureKind, ToolOutcome};

use super::common::outcome_result;

/// Parameters for the config fetch tool. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AstralConfigParams {}

/// Astral API configuration fetch tool.
#[derive(Debug, Clone)]
pub struct AstralConfigTool;

impl AstralConfigTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_astral_config";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch the Astral API configuration: supported chains, schema details, and query limits. Returns a normalized envelope with the configuration document.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the fetch. Always returns a result value; failures are
    /// normalized envelopes, never protocol errors.
    pub async fn execute(config: &Config) -> CallToolResult {
        let endpoint = config.astral.config_url();
        info!("Fetching Astral API configuration from: {}", endpoint);

        let client = AstralClient::new(config);
        let outcome = match client.get(&endpoint, &[], false).await {
            Ok(CallOutcome::Success {
                status,
                elapsed_ms,
                body,
            }) => ToolOutcome::success(body, CallMetadata::new(status, elapsed_ms)),
            // The config endpoint is not a by-id lookup; a 404 outcome
            // cannot occur here.
            Ok(CallOutcome::NotFound { .. }) => ToolOutcome::failure(
                FailureKind::NotFound,
                "Config endpoint reported not found",
                Map::new(),
            ),
            Err(e) => ToolOutcome::from_client_error(e),
        };

        let summary = if outcome.is_success() {
            "Fetched Astral API configuration".to_string()
        } else {
            outcome.message().to_string()
        };
        outcome_result(summary, &outcome)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AstralConfigParams>(),
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
            async move { Ok(Self::execute(&config).await) }.boxed()
        })
    }
}

impl Default for AstralConfigTool {
    fn default() -> Self {
        Self::new()
    }
}
