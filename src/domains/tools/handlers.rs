//! Tool dispatch boundary.
//!
//! The protocol host hands us a tool name and its named parameters and wants
//! back either a payload or an error message. [`ToolDispatch`] is that
//! contract, independent of rmcp, so the tools can be driven without a live
//! protocol session.

/// Invoke a tool by name.
///
/// `Ok` carries the payload text (pretty-printed JSON or plain text), `Err`
/// the error text. Implementations never panic on bad input and never let
/// one call affect the next.
pub trait ToolDispatch: Send + Sync {
    fn invoke(&self, name: &str, arguments: serde_json::Value) -> Result<String, String>;
}
