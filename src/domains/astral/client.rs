//! HTTP client for the Astral API.
//!
//! One GET per call through a fresh connection-scoped [`reqwest::Client`]
//! with the configured timeout. No connection pooling guarantee, no retries:
//! the configured retry budget is intentionally inert (single-attempt
//! behavior, see `core::config::MAX_RETRIES`).

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::Config;

use super::error::{ClientError, truncate_body};

/// Outcome of a single remote call, consumed immediately by the response
/// normalizer.
#[derive(Debug, Clone)]
pub enum CallOutcome {
    /// The API answered 2xx with a JSON body.
    Success {
        /// HTTP status code.
        status: u16,
        /// Round-trip time in milliseconds, if measured.
        elapsed_ms: Option<u64>,
        /// Parsed JSON response body.
        body: Value,
    },

    /// The API answered 404 on a by-id lookup: the resource does not exist.
    /// Reported as an outcome rather than an error so callers can surface
    /// `not_found` instead of `api_error`.
    NotFound {
        /// Round-trip time in milliseconds, if measured.
        elapsed_ms: Option<u64>,
    },
}

/// Client for the Astral API.
///
/// Cheap to construct; holds only the settings needed for one call.
#[derive(Debug, Clone)]
pub struct AstralClient {
    timeout: Duration,
    api_key: Option<String>,
}

impl AstralClient {
    /// Create a client from the process configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            timeout: Duration::from_secs(config.astral.timeout_secs),
            api_key: config.credentials.api_key.clone(),
        }
    }

    /// The configured timeout, in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }

    /// Issue a single GET request.
    ///
    /// `query` pairs are appended to the URL; `lookup` marks a by-id lookup,
    /// for which a 404 is a distinguished [`CallOutcome::NotFound`] rather
    /// than a [`ClientError::Status`].
    pub async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        lookup: bool,
    ) -> Result<CallOutcome, ClientError> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        debug!("GET {} ({} query params)", url, query.len());

        let mut request = client.get(url).query(query);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|e| self.classify(e))?;
        let elapsed_ms = Some(started.elapsed().as_millis() as u64);

        let status = response.status();

        if status.as_u16() == 404 && lookup {
            debug!("GET {} -> 404 (lookup, reported as not found)", url);
            return Ok(CallOutcome::NotFound { elapsed_ms });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} -> {}", url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body: Value = response.json().await.map_err(|e| self.classify(e))?;

        Ok(CallOutcome::Success {
            status: status.as_u16(),
            elapsed_ms,
            body,
        })
    }

    /// Split timeouts off from other transport failures.
    fn classify(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            ClientError::Transport(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(timeout_secs: u64) -> AstralClient {
        let mut config = Config::default();
        config.astral.timeout_secs = timeout_secs;
        AstralClient::new(&config)
    }

    #[tokio::test]
    async fn test_get_success_returns_body_and_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok"
            })))
            .mount(&server)
            .await;

        let client = test_client(5);
        let outcome = client
            .get(&format!("{}/health", server.uri()), &[], false)
            .await
            .unwrap();

        match outcome {
            CallOutcome::Success {
                status,
                elapsed_ms,
                body,
            } => {
                assert_eq!(status, 200);
                assert!(elapsed_ms.is_some());
                assert_eq!(body["status"], "ok");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_sends_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/location-proofs"))
            .and(query_param("limit", "5"))
            .and(query_param("chain", "sepolia"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "proofs": [] })),
            )
            .mount(&server)
            .await;

        let client = test_client(5);
        let outcome = client
            .get(
                &format!("{}/api/v0/location-proofs", server.uri()),
                &[("chain", "sepolia".to_string()), ("limit", "5".to_string())],
                false,
            )
            .await
            .unwrap();

        assert!(matches!(outcome, CallOutcome::Success { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_get_forwards_api_key_as_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .and(wiremock::matchers::header(
                "authorization",
                "Bearer secret-key",
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.astral.timeout_secs = 5;
        config.credentials.api_key = Some("secret-key".to_string());
        let client = AstralClient::new(&config);

        let outcome = client
            .get(&format!("{}/health", server.uri()), &[], false)
            .await
            .unwrap();
        assert!(matches!(outcome, CallOutcome::Success { .. }));
    }

    #[tokio::test]
    async fn test_get_non_2xx_is_status_error_with_truncated_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/config"))
            .respond_with(ResponseTemplate::new(500).set_body_string("e".repeat(2000)))
            .mount(&server)
            .await;

        let client = test_client(5);
        let err = client
            .get(&format!("{}/api/v0/config", server.uri()), &[], false)
            .await
            .unwrap_err();

        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.len(), 500);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_404_on_lookup_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let client = test_client(5);
        let outcome = client
            .get(
                &format!("{}/api/v0/location-proofs/0xabc", server.uri()),
                &[],
                true,
            )
            .await
            .unwrap();

        assert!(matches!(outcome, CallOutcome::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_404_without_lookup_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let client = test_client(5);
        let err = client
            .get(&format!("{}/nowhere", server.uri()), &[], false)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_get_timeout_carries_configured_budget() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = test_client(1);
        let err = client
            .get(&format!("{}/health", server.uri()), &[], false)
            .await
            .unwrap_err();

        match err {
            ClientError::Timeout { timeout_secs } => assert_eq!(timeout_secs, 1),
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
