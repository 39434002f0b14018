//! Location proof lookup tool.
//!
//! Fetches a single location proof by its unique identifier. A remote 404 is
//! a distinguished `not_found` failure, not an `api_error`: the API answered,
//! the record simply does not exist.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::astral::{AstralClient, CallOutcome};
use crate::domains::tools::outcome::{CallMetadata, FailureKind, ToolOutcome};

use super::common::{outcome_result, validate_uid};

/// Parameters for looking up a location proof by uid.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProofByUidParams {
    /// The unique identifier of the location proof.
    #[schemars(description = "Location proof uid: 0x followed by 64 hex digits (66 characters total)")]
    pub uid: String,
}

/// Location proof lookup tool.
#[derive(Debug, Clone)]
pub struct ProofByUidTool;

impl ProofByUidTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_location_proof_by_uid";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a single location proof (attestation) from the Astral API by its uid (0x + 64 hex digits). Reports not_found when the uid is well-formed but no such proof exists.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the lookup. Always returns a result value; failures are
    /// normalized envelopes, never protocol errors.
    pub async fn execute(params: &ProofByUidParams, config: &Config) -> CallToolResult {
        if let Err(outcome) = validate_uid(&params.uid) {
            return outcome_result(outcome.message().to_string(), &outcome);
        }

        info!("Fetching location proof: {}", params.uid);

        let client = AstralClient::new(config);
        let outcome = match client
            .get(&config.astral.location_proof_url(&params.uid), &[], true)
            .await
        {
            Ok(CallOutcome::Success {
                status,
                elapsed_ms,
                body,
            }) => {
                let metadata = CallMetadata::new(status, elapsed_ms)
                    .echo("uid", Value::String(params.uid.clone()));
                ToolOutcome::success(body, metadata)
            }
            Ok(CallOutcome::NotFound { .. }) => {
                let mut details = Map::new();
                details.insert(
                    "attempted_uid".to_string(),
                    Value::String(params.uid.clone()),
                );
                ToolOutcome::failure(
                    FailureKind::NotFound,
                    format!("No location proof found with uid {}", params.uid),
                    details,
                )
            }
            Err(e) => ToolOutcome::from_client_error(e),
        };

        let summary = if outcome.is_success() {
            format!("Fetched location proof {}", params.uid)
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
            input_schema: cached_schema_for_type::<ProofByUidParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: ProofByUidParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

impl Default for ProofByUidTool {
    fn default() -> Self {
        Self::new()
    }
}
