//! Prototype MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing a read-only catalog of
//! mock-API prototypes to MCP clients.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: `hello_world`, `list_prototypes`, `get_prototype_detail`
//!   - **resources**: server information and usage guide
//!   - **prompts**: the prototype assistant prompt
//!
//! # Example
//!
//! ```rust,no_run
//! use prototype_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
