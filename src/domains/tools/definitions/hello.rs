//! Greeting tool.
//!
//! Answers locally; no upstream call is made.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::{ToolRoute, schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{dispatch_route, parse_params};
use crate::domains::tools::{ToolError, ToolRegistry};

/// Parameters for the greeting tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HelloWorldParams {
    /// Name of the person to greet.
    #[schemars(description = "Name of the person to greet")]
    pub name: String,
}

/// Hello world tool - greets someone by name.
pub struct HelloWorldTool;

impl HelloWorldTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "hello_world";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Say hello to someone by name.";

    /// Build the greeting text.
    #[instrument(skip_all, fields(name = %params.name))]
    pub fn run(params: &HelloWorldParams) -> Result<String, ToolError> {
        info!("Greeting requested");
        Ok(format!("¡Hola, {}! 👋", params.name))
    }

    /// Parse raw arguments and run the tool.
    pub fn invoke(arguments: serde_json::Value) -> Result<String, ToolError> {
        let params: HelloWorldParams = parse_params(arguments)?;
        Self::run(&params)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<HelloWorldParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(registry: Arc<ToolRegistry>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        dispatch_route(Self::to_tool(), registry)
    }
}
