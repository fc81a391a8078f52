//! Server info resource definition.

use chrono::Utc;

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::tools::ToolRegistry;

/// Runtime view of the server: identity, upstream endpoints and tools.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "prototypes://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server version, configured prototype API endpoints and registered tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl ServerInfoResource {
    /// Render the info document for the given configuration.
    pub fn resolve(config: &Config) -> Result<String, ResourceError> {
        let info = serde_json::json!({
            "server": config.server.name,
            "version": config.server.version,
            "endpoints": {
                "list": config.prototypes.list_base_url,
                "detail": config.prototypes.detail_base_url,
            },
            "request_timeout_secs": config.prototypes.request_timeout_secs,
            "tools": ToolRegistry::tool_names(),
            "generated_at": Utc::now().to_rfc3339(),
        });

        serde_json::to_string_pretty(&info).map_err(|e| ResourceError::internal(e.to_string()))
    }
}
