//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is the catalog side of the tool surface: the fixed set of
//! tool names, their metadata, and a dispatch-by-name path. Registration
//! happens once at process start; the set is read-only afterwards.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use crate::core::config::Config;

use super::definitions::{
    AstralConfigTool, CheckHealthTool, ProofByUidTool, QueryProofsTool, ServerInfoTool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// All registered tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            CheckHealthTool::NAME,
            ServerInfoTool::NAME,
            QueryProofsTool::NAME,
            ProofByUidTool::NAME,
            AstralConfigTool::NAME,
        ]
    }

    /// All tools as Tool models (metadata).
    ///
    /// Single source of truth for the declared input contracts.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CheckHealthTool::to_tool(),
            ServerInfoTool::to_tool(),
            QueryProofsTool::to_tool(),
            ProofByUidTool::to_tool(),
            AstralConfigTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name: pure lookup, then a direct invocation.
    ///
    /// All tools return `Ok` with a normalized envelope under normal
    /// parameter and I/O faults; the health check alone maps its hard
    /// failure into `ToolError::ExecutionFailed`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            CheckHealthTool::NAME => CheckHealthTool::execute(&self.config)
                .await
                .map_err(|e| ToolError::execution_failed(e.message.clone())),
            ServerInfoTool::NAME => Ok(ServerInfoTool::execute(&self.config)),
            QueryProofsTool::NAME => {
                let params = serde_json::from_value(arguments)
                    .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
                Ok(QueryProofsTool::execute(&params, &self.config).await)
            }
            ProofByUidTool::NAME => {
                let params = serde_json::from_value(arguments)
                    .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
                Ok(ProofByUidTool::execute(&params, &self.config).await)
            }
            AstralConfigTool::NAME => Ok(AstralConfigTool::execute(&self.config).await),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"check_astral_api_health"));
        assert!(names.contains(&"get_server_info"));
        assert!(names.contains(&"query_location_proofs"));
        assert!(names.contains(&"get_location_proof_by_uid"));
        assert!(names.contains(&"get_astral_config"));
    }

    #[test]
    fn test_tool_metadata_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        let names = ToolRegistry::tool_names();
        assert_eq!(tools.len(), names.len());
        for tool in &tools {
            assert!(names.contains(&tool.name.as_ref()));
            assert!(tool.description.is_some());
        }
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let registry = test_registry();
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_dispatch_server_info() {
        let registry = test_registry();
        let result = registry
            .call_tool("get_server_info", serde_json::json!({}))
            .await
            .unwrap();
        let value = result.structured_content.unwrap();
        assert_eq!(value["name"], "astral-mcp-server");
    }

    #[tokio::test]
    async fn test_dispatch_rejects_malformed_arguments() {
        let registry = test_registry();
        let result = registry
            .call_tool(
                "get_location_proof_by_uid",
                serde_json::json!({ "uid": 42 }),
            )
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_dispatch_validation_failure_is_a_value_not_an_error() {
        let registry = test_registry();
        let result = registry
            .call_tool(
                "query_location_proofs",
                serde_json::json!({ "limit": 0 }),
            )
            .await
            .unwrap();
        let value = result.structured_content.unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "validation_error");
    }
}
