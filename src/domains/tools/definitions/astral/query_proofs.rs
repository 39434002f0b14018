//! Location proof query tool.
//!
//! Paginated query over the Astral location-proofs endpoint with optional
//! chain, prover, limit, and offset filters. Arguments are validated before
//! any network I/O; only caller-supplied filters are forwarded as query
//! parameters.

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

use super::common::{outcome_result, validate_limit, validate_offset, validate_prover};

/// Parameters for querying location proofs.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct QueryProofsParams {
    /// Filter by blockchain network.
    #[schemars(description = "Blockchain network filter (e.g. 'sepolia', 'base')")]
    pub chain: Option<String>,

    /// Filter by prover address.
    #[schemars(description = "Prover address filter: 0x followed by 40 hex digits")]
    pub prover: Option<String>,

    /// Maximum number of proofs to return.
    #[schemars(description = "Maximum number of proofs to return, 1-100 (default: 10)")]
    pub limit: Option<i64>,

    /// Number of proofs to skip.
    #[schemars(description = "Number of proofs to skip for pagination (default: 0)")]
    pub offset: Option<i64>,
}

impl QueryProofsParams {
    /// Validate all supplied arguments. Absent arguments are valid: the API
    /// applies its own defaults (limit 10, offset 0).
    fn validate(&self) -> Result<(), ToolOutcome> {
        if let Some(limit) = self.limit {
            validate_limit(limit)?;
        }
        if let Some(offset) = self.offset {
            validate_offset(offset)?;
        }
        if let Some(prover) = &self.prover {
            validate_prover(prover)?;
        }
        Ok(())
    }

    /// Query pairs for the supplied arguments only.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(chain) = &self.chain {
            query.push(("chain", chain.clone()));
        }
        if let Some(prover) = &self.prover {
            query.push(("prover", prover.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        query
    }

    /// The supplied arguments as a JSON map, echoed back in metadata.
    fn echo_map(&self) -> Map<String, Value> {
        let mut echo = Map::new();
        if let Some(chain) = &self.chain {
            echo.insert("chain".to_string(), Value::String(chain.clone()));
        }
        if let Some(prover) = &self.prover {
            echo.insert("prover".to_string(), Value::String(prover.clone()));
        }
        if let Some(limit) = self.limit {
            echo.insert("limit".to_string(), Value::from(limit));
        }
        if let Some(offset) = self.offset {
            echo.insert("offset".to_string(), Value::from(offset));
        }
        echo
    }
}

/// Location proof query tool.
#[derive(Debug, Clone)]
pub struct QueryProofsTool;

impl QueryProofsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "query_location_proofs";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Query location proofs (attestations) from the Astral API with optional filters: chain, prover address, limit (1-100, default 10), and offset. Returns a normalized envelope with the proof data and call metadata.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the query. Always returns a result value; failures are
    /// normalized envelopes, never protocol errors.
    pub async fn execute(params: &QueryProofsParams, config: &Config) -> CallToolResult {
        if let Err(outcome) = params.validate() {
            return outcome_result(outcome.message().to_string(), &outcome);
        }

        let query = params.query_pairs();
        info!("Querying location proofs ({} filters)", query.len());

        let client = AstralClient::new(config);
        let outcome = match client
            .get(&config.astral.location_proofs_url(), &query, false)
            .await
        {
            Ok(CallOutcome::Success {
                status,
                elapsed_ms,
                body,
            }) => {
                let metadata = CallMetadata::new(status, elapsed_ms)
                    .echo("query", Value::Object(params.echo_map()));
                ToolOutcome::success(body, metadata)
            }
            // List calls never observe a distinguished 404 outcome.
            Ok(CallOutcome::NotFound { .. }) => ToolOutcome::failure(
                FailureKind::NotFound,
                "Location proofs endpoint reported not found",
                Map::new(),
            ),
            Err(e) => ToolOutcome::from_client_error(e),
        };

        let summary = if outcome.is_success() {
            "Location proof query succeeded".to_string()
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
            input_schema: cached_schema_for_type::<QueryProofsParams>(),
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
                let params: QueryProofsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

impl Default for QueryProofsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default();
        config.astral.base_url = server.uri();
        config.astral.timeout_secs = 1;
        config
    }

    fn structured(result: CallToolResult) -> Value {
        result.structured_content.expect("structured content")
    }

    #[test]
    fn test_params_deserialize_with_all_absent() {
        let params: QueryProofsParams = serde_json::from_str("{}").unwrap();
        assert!(params.chain.is_none());
        assert!(params.limit.is_none());
        assert!(params.query_pairs().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_limit_is_validation_error_without_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = config_for(&server);
        for bad_limit in [0, -5, 101] {
            let params = QueryProofsParams {
                limit: Some(bad_limit),
                ..Default::default()
            };
            let value = structured(QueryProofsTool::execute(&params, &config).await);
            assert_eq!(value["success"], false);
            assert_eq!(value["error"], "validation_error");
            assert_eq!(value["details"]["parameter"], "limit");
        }
    }

    #[tokio::test]
    async fn test_negative_offset_is_validation_error() {
        let server = MockServer::start().await;
        let config = config_for(&server);
        let params = QueryProofsParams {
            offset: Some(-1),
            ..Default::default()
        };
        let value = structured(QueryProofsTool::execute(&params, &config).await);
        assert_eq!(value["error"], "validation_error");
        assert_eq!(value["details"]["parameter"], "offset");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_prover_is_validation_error() {
        let server = MockServer::start().await;
        let config = config_for(&server);
        let params = QueryProofsParams {
            prover: Some("invalid_address".to_string()),
            ..Default::default()
        };
        let value = structured(QueryProofsTool::execute(&params, &config).await);
        assert_eq!(value["error"], "validation_error");
        assert_eq!(value["details"]["parameter"], "prover");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_echoes_supplied_query_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/location-proofs"))
            .and(query_param("chain", "sepolia"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "proofs": [{"uid": "0xaa"}],
                "count": 1
            })))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let params = QueryProofsParams {
            chain: Some("sepolia".to_string()),
            limit: Some(5),
            ..Default::default()
        };
        let value = structured(QueryProofsTool::execute(&params, &config).await);

        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["count"], 1);
        assert_eq!(value["metadata"]["status_code"], 200);
        assert_eq!(value["metadata"]["query"]["chain"], "sepolia");
        assert_eq!(value["metadata"]["query"]["limit"], 5);
        assert!(value["metadata"]["query"].get("offset").is_none());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        // offset was not supplied, so it must not appear on the wire
        assert!(!requests[0].url.query().unwrap_or("").contains("offset"));
    }

    #[tokio::test]
    async fn test_api_error_carries_status_and_truncated_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/location-proofs"))
            .respond_with(ResponseTemplate::new(500).set_body_string("b".repeat(1000)))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let params = QueryProofsParams::default();
        let value = structured(QueryProofsTool::execute(&params, &config).await);

        assert_eq!(value["error"], "api_error");
        assert_eq!(value["details"]["status_code"], 500);
        assert_eq!(value["details"]["response_text"].as_str().unwrap().len(), 500);
    }

    #[tokio::test]
    async fn test_timeout_carries_configured_budget() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/location-proofs"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config = config_for(&server);
        let params = QueryProofsParams::default();
        let value = structured(QueryProofsTool::execute(&params, &config).await);

        assert_eq!(value["error"], "timeout_error");
        assert_eq!(value["details"]["timeout_seconds"], 1);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unexpected_error() {
        let mut config = Config::default();
        // Reserved TEST-NET-1 address, nothing listens there
        config.astral.base_url = "http://192.0.2.1:9".to_string();
        config.astral.timeout_secs = 1;

        let params = QueryProofsParams::default();
        let value = structured(QueryProofsTool::execute(&params, &config).await);

        assert_eq!(value["success"], false);
        assert!(
            value["error"] == "unexpected_error" || value["error"] == "timeout_error",
            "got {}",
            value["error"]
        );
    }
}
