//! Tools domain module.
//!
//! Tools are the functions MCP clients call. This server has three:
//! `hello_world`, `list_prototypes` and `get_prototype_detail`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter for the STDIO/TCP transports
//! - `registry.rs` - Tool metadata and name-based dispatch
//! - `handlers.rs` - The [`ToolDispatch`] capability
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::ToolDispatch;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
