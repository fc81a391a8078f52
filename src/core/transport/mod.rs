//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the mode agent hosts spawn us in - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over a TCP socket - feature: `tcp`
//!
//! Both hand the connection to rmcp, which drives the protocol against
//! [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
