//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

#[cfg(feature = "http")]
use super::error::ToolError;

use super::definitions::SendTelegramMessageTool;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![SendTelegramMessageTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![SendTelegramMessageTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            SendTelegramMessageTool::NAME => {
                SendTelegramMessageTool::http_handler(arguments, self.config.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names, vec!["send_telegram_message"]);
    }

    #[test]
    fn test_registry_metadata_has_schema() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 1);
        let schema = &tools[0].input_schema;
        assert!(schema.get("properties").is_some());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_send_without_token() {
        // Default config has no token; the tool reports it as output text.
        let registry = ToolRegistry::new(test_config());
        let result = registry
            .call_tool("send_telegram_message", serde_json::json!({"text": "hi"}))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
    }
}
