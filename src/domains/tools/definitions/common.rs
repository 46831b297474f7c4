//! Common utilities shared across tool definitions.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result with a single text content item.
///
/// Tool failures are part of the conversational surface: the calling agent
/// sees readable text, never a protocol-level error.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with a single text content item.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
