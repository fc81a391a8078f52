//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// None of these is fatal: every variant is rendered as text and returned to
/// the caller as an error result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Missing or invalid input parameters. The caller must fix the input.
    #[error("{0}")]
    Usage(String),

    /// The upstream request could not be completed (connect, timeout, read).
    #[error("Error calling {api}: {reason}")]
    Network { api: &'static str, reason: String },

    /// The upstream answered with a non-2xx status.
    #[error("Non-OK status {status} from {api}: {body}")]
    Status {
        api: &'static str,
        status: u16,
        body: String,
    },

    /// The upstream body was not the JSON we expected.
    #[error("Error parsing {what} JSON: {reason}")]
    Decode { what: &'static str, reason: String },

    /// No prototype in the listing carries the requested name.
    #[error("prototype with name {name:?} not found. Available: {candidates:?}")]
    NotFound {
        name: String,
        candidates: Vec<String>,
    },

    /// The HTTP client could not be built; no request was attempted.
    #[error("Failed to create HTTP client: {0}")]
    ClientInit(String),

    /// A tool's own result could not be rendered as JSON.
    #[error("Error encoding result: {0}")]
    Encode(String),

    /// Dispatch received a tool name nobody registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// Create a new "usage" error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create a new "network" error.
    pub fn network(api: &'static str, reason: impl ToString) -> Self {
        Self::Network {
            api,
            reason: reason.to_string(),
        }
    }

    /// Create a new "decode" error.
    pub fn decode(what: &'static str, reason: impl ToString) -> Self {
        Self::Decode {
            what,
            reason: reason.to_string(),
        }
    }

    /// Create a new "encode" error.
    pub fn encode(reason: impl ToString) -> Self {
        Self::Encode(reason.to_string())
    }

    /// Whether the failure happened talking to the upstream service.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_has_code_and_body() {
        let err = ToolError::Status {
            api: "prototypes API",
            status: 500,
            body: "internal error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("internal error"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_client_init_names_no_api() {
        let err = ToolError::ClientInit("tls backend unavailable".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to create HTTP client: tls backend unavailable"
        );
        assert!(!err.to_string().contains("API"));
    }

    #[test]
    fn test_not_found_lists_candidates_in_order() {
        let err = ToolError::NotFound {
            name: "Logout".to_string(),
            candidates: vec!["Login".to_string(), "Signup".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"Logout\""));
        assert!(msg.contains(r#"["Login", "Signup"]"#));
        assert!(!err.is_transport());
    }
}
