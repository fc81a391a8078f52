//! Common utilities shared across tools.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, Tool},
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::domains::tools::{ToolError, ToolRegistry};

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Fold a tool outcome into the result handed back over MCP.
pub fn into_call_result(outcome: Result<String, ToolError>) -> CallToolResult {
    match outcome {
        Ok(text) => success_result(text),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Route an rmcp tool call through the registry.
///
/// Every call runs on the blocking pool: the prototype tools use
/// `reqwest::blocking`, which must stay off the async runtime.
pub fn dispatch_route<S>(tool: Tool, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.clone();
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        let name = name.clone();
        async move {
            tokio::task::spawn_blocking(move || {
                into_call_result(registry.call(&name, serde_json::Value::Object(args)))
            })
            .await
            .map_err(|e| McpError::internal_error(format!("Task execution failed: {}", e), None))
        }
        .boxed()
    })
}

/// Pretty-print a payload as two-space indented JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(ToolError::encode)
}

/// Parse tool arguments, reporting shape problems as usage errors.
pub fn parse_params<T>(arguments: serde_json::Value) -> Result<T, ToolError>
where
    T: for<'de> Deserialize<'de>,
{
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::usage(format!("Invalid arguments: {}", e)))
}

/// Deserialize a field, mapping an explicit `null` to the type's default.
///
/// Paired with `#[serde(default)]` this gives zero values for both absent and
/// null upstream fields.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
