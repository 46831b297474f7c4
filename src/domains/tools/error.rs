//! Tool-specific error types.
//!
//! Note that a failed send is NOT a `ToolError`: remote and configuration
//! failures are returned to the caller as tool output text. These errors
//! cover only protocol-level problems such as an unknown tool name.

use thiserror::Error;

/// Errors that can occur during tool dispatch.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
