//! `get_prototype_detail` tool.
//!
//! A lookup runs as a straight pipeline:
//!
//! 1. pick the selector (`id` wins over `name`; neither is a usage error and
//!    nothing is fetched),
//! 2. for a name, fetch the listing and resolve it to an id,
//! 3. fetch the detail for that id,
//! 4. project it to [`PrototypeDetail`].
//!
//! Any failure ends the lookup; there are no retries.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::{ToolRoute, schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::client::PrototypeApi;
use super::model::PrototypeDetail;
use super::resolve::{Selector, resolve_id_by_name, select};
use crate::domains::tools::definitions::common::{dispatch_route, parse_params, to_pretty_json};
use crate::domains::tools::{ToolError, ToolRegistry};

/// Parameters for the detail lookup. Both are optional; at least one must
/// be non-empty.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PrototypeDetailParams {
    /// Prototype id.
    #[schemars(description = "Prototype id (preferred if known)")]
    #[serde(default)]
    pub id: Option<String>,

    /// Prototype name, resolved to an id when `id` is not given.
    #[schemars(description = "Prototype name (if id not provided)")]
    #[serde(default)]
    pub name: Option<String>,
}

/// Looks up one prototype by id or by name.
pub struct PrototypeDetailTool;

impl PrototypeDetailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prototype_detail";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get prototype detail by id or name. If name is provided, it will be resolved to an id first.";

    /// Resolve the selector and fetch the projected detail.
    #[instrument(skip(api))]
    pub fn lookup(
        params: &PrototypeDetailParams,
        api: &PrototypeApi,
    ) -> Result<PrototypeDetail, ToolError> {
        let id = match select(params.id.as_deref(), params.name.as_deref())? {
            Selector::Id(id) => id.to_string(),
            Selector::Name(name) => {
                let items = api.fetch_listing()?;
                resolve_id_by_name(name, &items)?
            }
        };

        info!("Fetching prototype detail for id {}", id);
        let item = api.fetch_detail(&id)?;
        Ok(PrototypeDetail::from(item))
    }

    /// Run the lookup and render the detail as pretty JSON.
    pub fn run(params: &PrototypeDetailParams, api: &PrototypeApi) -> Result<String, ToolError> {
        to_pretty_json(&Self::lookup(params, api)?)
    }

    /// Parse raw arguments, then connect and run.
    ///
    /// `connect` is only called once the arguments name a prototype, so a
    /// usage error never builds a client or issues a request.
    pub fn invoke<C>(arguments: serde_json::Value, connect: C) -> Result<String, ToolError>
    where
        C: FnOnce() -> Result<PrototypeApi, ToolError>,
    {
        let params: PrototypeDetailParams = parse_params(arguments)?;
        select(params.id.as_deref(), params.name.as_deref())?;
        Self::run(&params, &connect()?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<PrototypeDetailParams>().into(),
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
