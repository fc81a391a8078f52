//! Usage guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Static Markdown guide to the tools and their configuration.
pub struct UsageGuideResource;

const GUIDE: &str = r#"# Prototype MCP Server

Read-only access to a catalog of mock-API prototypes.

## Tools

| Tool | Arguments | Returns |
|------|-----------|---------|
| `hello_world` | `name` | A greeting |
| `list_prototypes` | none | `[{id, name, method, urlPath}]` |
| `get_prototype_detail` | `id` or `name` | One prototype with its request and response |

`get_prototype_detail` prefers `id`. A `name` is matched against the catalog
ignoring case and surrounding whitespace; the first match is used. When no
prototype matches, the error lists every available name.

## Configuration

| Variable | Default |
|----------|---------|
| `MCP_PROTOTYPES_LIST_URL` | `https://development.jalocompany.tech/mocky/v1` |
| `MCP_PROTOTYPES_API_URL` | `http://209.126.13.207:8010/v1` |
| `MCP_HTTP_TIMEOUT_SECS` | `30` |
| `MCP_TRANSPORT` | `stdio` |
| `MCP_LOG_LEVEL` | `info` |
"#;

impl ResourceDefinition for UsageGuideResource {
    const URI: &'static str = "prototypes://docs/usage";
    const NAME: &'static str = "Usage Guide";
    const DESCRIPTION: &'static str = "How to call the prototype tools and configure the server";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(GUIDE.to_string())
    }
}
