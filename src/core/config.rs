//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! constructed once at process start and shared by reference with every
//! component. There is no global mutable state.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Default Astral API base URL.
pub const DEFAULT_ASTRAL_BASE_URL: &str = "https://api.astral.global";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Declared retry budget.
///
/// Intentionally inert: every tool performs exactly one request attempt.
/// Do not wire a retry loop to this constant without tests that exercise it.
pub const MAX_RETRIES: u32 = 3;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Astral API endpoint and timeout settings.
    pub astral: AstralConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Astral API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstralConfig {
    /// Base URL of the Astral API.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Declared retry budget. Currently inert; see [`MAX_RETRIES`].
    pub max_retries: u32,
}

impl AstralConfig {
    /// URL of the health check endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// URL of the location-proofs list endpoint.
    pub fn location_proofs_url(&self) -> String {
        format!("{}/api/v0/location-proofs", self.base_url)
    }

    /// URL of a single location proof, uid appended as a path segment.
    pub fn location_proof_url(&self, uid: &str) -> String {
        format!("{}/api/v0/location-proofs/{}", self.base_url, uid)
    }

    /// URL of the API configuration endpoint.
    pub fn config_url(&self) -> String {
        format!("{}/api/v0/config", self.base_url)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Astral API key, forwarded as a bearer token when present.
    /// Absence is a valid state: the API is usable unauthenticated.
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialsConfig {
    /// Whether an API key is configured.
    pub fn api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "astral-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            astral: AstralConfig {
                base_url: DEFAULT_ASTRAL_BASE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                max_retries: MAX_RETRIES,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            credentials: CredentialsConfig { api_key: None },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `ASTRAL_API_BASE_URL`, and `ASTRAL_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("ASTRAL_API_BASE_URL") {
            config.astral.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(api_key) = std::env::var("ASTRAL_API_KEY") {
            config.credentials.api_key = Some(api_key);
            info!("Astral API key loaded from environment");
        }

        config
    }
}
