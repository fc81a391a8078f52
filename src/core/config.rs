//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the catalog used by `list_prototypes`.
pub const DEFAULT_LIST_BASE_URL: &str = "https://development.jalocompany.tech/mocky/v1";

/// Default base URL of the API used for name resolution and detail lookups.
pub const DEFAULT_DETAIL_BASE_URL: &str = "http://209.126.13.207:8010/v1";

/// Default timeout for a single upstream request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream prototypes API configuration.
    pub prototypes: PrototypesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where the prototype tools fetch their data from.
///
/// The listing tool and the detail tool talk to two different deployments of
/// the mocking service, so both bases are configurable independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypesConfig {
    /// Base URL for `list_prototypes` (`<base>/prototypes`).
    pub list_base_url: String,

    /// Base URL for name resolution and `get_prototype_detail`
    /// (`<base>/prototypes` and `<base>/prototypes/<id>`).
    pub detail_base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for PrototypesConfig {
    fn default() -> Self {
        Self {
            list_base_url: DEFAULT_LIST_BASE_URL.to_string(),
            detail_base_url: DEFAULT_DETAIL_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "prototype-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            prototypes: PrototypesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
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
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_PROTOTYPES_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_PROTOTYPES_LIST_URL") {
            info!("Prototype listing API overridden: {}", url);
            config.prototypes.list_base_url = url;
        }

        if let Ok(url) = std::env::var("MCP_PROTOTYPES_API_URL") {
            info!("Prototype detail API overridden: {}", url);
            config.prototypes.detail_base_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_HTTP_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.prototypes.request_timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_HTTP_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.prototypes.request_timeout_secs
                ),
            }
        }

        config
    }

    /// Check that the configuration can be used to reach the upstream API.
    pub fn validate(&self) -> Result<()> {
        for (key, url) in [
            ("list_base_url", &self.prototypes.list_base_url),
            ("detail_base_url", &self.prototypes.detail_base_url),
        ] {
            if url.trim().is_empty() {
                return Err(Error::config(format!("{} must not be empty", key)));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::config(format!(
                    "{} must be an http(s) URL, got {:?}",
                    key, url
                )));
            }
        }

        if self.prototypes.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be positive"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();
        assert_eq!(config.prototypes.list_base_url, DEFAULT_LIST_BASE_URL);
        assert_eq!(config.prototypes.detail_base_url, DEFAULT_DETAIL_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoints_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PROTOTYPES_API_URL", "http://127.0.0.1:9000/v1");
            std::env::set_var("MCP_HTTP_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.prototypes.detail_base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.prototypes.request_timeout_secs, 5);
        unsafe {
            std::env::remove_var("MCP_PROTOTYPES_API_URL");
            std::env::remove_var("MCP_HTTP_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_HTTP_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(
            config.prototypes.request_timeout_secs,
            DEFAULT_REQUEST_TIMEOUT_SECS
        );
        unsafe {
            std::env::remove_var("MCP_HTTP_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = Config::default();
        config.prototypes.list_base_url = "ftp://example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("list_base_url"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.prototypes.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
