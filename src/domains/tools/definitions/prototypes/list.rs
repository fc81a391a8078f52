//! `list_prototypes` tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::{ToolRoute, schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::client::PrototypeApi;
use super::model::summarize;
use crate::domains::tools::definitions::common::{dispatch_route, to_pretty_json};
use crate::domains::tools::{ToolError, ToolRegistry};

/// The listing takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListPrototypesParams {}

/// Lists every prototype as `{id, name, method, urlPath}`.
pub struct ListPrototypesTool;

impl ListPrototypesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_prototypes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch prototypes and return a list of {id, name, method, urlPath}";

    /// Fetch the listing and render it as pretty JSON, in upstream order.
    #[instrument(skip_all)]
    pub fn run(api: &PrototypeApi) -> Result<String, ToolError> {
        let items = api.fetch_listing()?;
        info!("Listing {} prototype(s)", items.len());
        to_pretty_json(&summarize(&items))
    }

    /// Connect and run. Arguments, if any, are ignored.
    pub fn invoke<C>(connect: C) -> Result<String, ToolError>
    where
        C: FnOnce() -> Result<PrototypeApi, ToolError>,
    {
        Self::run(&connect()?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListPrototypesParams>().into(),
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
