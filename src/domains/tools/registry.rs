//! Tool Registry - central registration and dispatch for all tools.

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::{info, warn};

use super::ToolError;
use super::definitions::prototypes::{HttpFetch, PrototypeApi};
use super::definitions::{HelloWorldTool, ListPrototypesTool, PrototypeDetailTool};
use super::handlers::ToolDispatch;
use crate::core::config::Config;

/// Tool registry - lists the tools and dispatches calls to them.
///
/// Without an injected fetcher every call builds a blocking reqwest client,
/// so [`ToolDispatch::invoke`] must run off the async runtime (e.g. inside
/// `spawn_blocking`).
pub struct ToolRegistry {
    config: Arc<Config>,
    fetcher: Option<Arc<dyn HttpFetch>>,
}

impl ToolRegistry {
    /// Create a registry that talks to the configured upstream over HTTP.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            fetcher: None,
        }
    }

    /// Create a registry that sends every upstream request through `fetcher`.
    pub fn with_fetcher(config: Arc<Config>, fetcher: Arc<dyn HttpFetch>) -> Self {
        Self {
            config,
            fetcher: Some(fetcher),
        }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            HelloWorldTool::NAME,
            ListPrototypesTool::NAME,
            PrototypeDetailTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            HelloWorldTool::to_tool(),
            ListPrototypesTool::to_tool(),
            PrototypeDetailTool::to_tool(),
        ]
    }

    fn list_api(&self) -> Result<PrototypeApi, ToolError> {
        let config = &self.config.prototypes;
        match &self.fetcher {
            Some(fetcher) => Ok(PrototypeApi::new(&config.list_base_url, fetcher.clone())),
            None => PrototypeApi::from_config(config).map(|(list, _)| list),
        }
    }

    fn detail_api(&self) -> Result<PrototypeApi, ToolError> {
        let config = &self.config.prototypes;
        match &self.fetcher {
            Some(fetcher) => Ok(PrototypeApi::new(&config.detail_base_url, fetcher.clone())),
            None => PrototypeApi::from_config(config).map(|(_, detail)| detail),
        }
    }

    /// Dispatch a call, keeping the typed error.
    pub fn call(&self, name: &str, arguments: serde_json::Value) -> Result<String, ToolError> {
        match name {
            HelloWorldTool::NAME => HelloWorldTool::invoke(arguments),
            ListPrototypesTool::NAME => ListPrototypesTool::invoke(|| self.list_api()),
            PrototypeDetailTool::NAME => {
                PrototypeDetailTool::invoke(arguments, || self.detail_api())
            }
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}

impl ToolDispatch for ToolRegistry {
    fn invoke(&self, name: &str, arguments: serde_json::Value) -> Result<String, String> {
        info!("Dispatching tool call: {}", name);
        self.call(name, arguments).map_err(|e| {
            warn!("Tool {} failed: {}", name, e);
            e.to_string()
        })
    }
}
