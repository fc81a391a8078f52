//! Tool definitions module.
//!
//! Each tool lives in its own file and exposes the same surface:
//! `NAME`, `DESCRIPTION`, a `run` function holding the logic, `invoke()`
//! parsing raw arguments, `to_tool()` and `create_route()`. Routes dispatch
//! through the [`ToolRegistry`](super::ToolRegistry).

pub mod common;
pub mod hello;
pub mod prototypes;

pub use hello::{HelloWorldParams, HelloWorldTool};
pub use prototypes::{
    ListPrototypesParams, ListPrototypesTool, PrototypeDetailParams, PrototypeDetailTool,
};
