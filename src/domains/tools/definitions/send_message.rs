//! Telegram message sending tool.
//!
//! This tool delivers a text message to a Telegram chat via the Bot API.
//! All outcomes - including missing configuration and provider rejections -
//! are returned as tool output text so the calling agent can read them.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::telegram::{ChatId, ParseMode, SendMessageRequest, TelegramClient};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::common::{error_result, success_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the send_telegram_message tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SendTelegramMessageParams {
    /// Message body.
    #[schemars(description = "Text of the message to send")]
    pub text: String,

    /// Target chat id; falls back to DEFAULT_CHAT_ID when omitted.
    #[serde(default)]
    #[schemars(description = "Target chat id (overrides the configured default)")]
    pub chat_id: Option<i64>,

    /// Formatting mode passed through to the Bot API.
    #[serde(default)]
    #[schemars(description = "Formatting mode: Markdown or HTML")]
    pub parse_mode: Option<ParseMode>,

    /// Deliver the message without a client-side notification sound.
    #[serde(default)]
    #[schemars(description = "Send silently, without notification (default: false)")]
    pub disable_notification: Option<bool>,
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Telegram message sending tool implementation.
#[derive(Debug, Clone)]
pub struct SendTelegramMessageTool;

impl SendTelegramMessageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "send_telegram_message";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Send a text message to a Telegram chat via the Bot API. Uses the configured \
         default chat when no chat_id is given. Supports Markdown/HTML formatting and \
         silent delivery. Returns a confirmation with the chat the message was sent to.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    ///
    /// Stateless and idempotent per call, modulo the external side effect:
    /// re-invocation sends a duplicate message, which is expected.
    pub async fn execute(params: &SendTelegramMessageParams, config: &Config) -> CallToolResult {
        let Some(token) = config.telegram.bot_token.as_deref() else {
            return error_result("Error: BOT_TOKEN is not configured");
        };

        // Explicit chat_id wins over the configured default.
        let chat_id = params
            .chat_id
            .map(ChatId::from)
            .or_else(|| config.telegram.default_chat_id.as_deref().map(ChatId::parse));
        let Some(chat_id) = chat_id else {
            return error_result("Error: No chat_id provided and DEFAULT_CHAT_ID is not configured");
        };

        info!(chat_id = %chat_id, "Sending Telegram message");

        let client = TelegramClient::with_api_base(token, &config.telegram.api_base);
        let request = SendMessageRequest {
            chat_id,
            text: params.text.clone(),
            parse_mode: params.parse_mode,
            disable_notification: params.disable_notification,
        };

        match client.send_message(&request).await {
            // The provider's response is authoritative for the confirmation,
            // not the caller's input.
            Ok(message) => success_result(format!(
                "Message sent successfully to chat {}",
                message.chat.id
            )),
            Err(e) => error_result(&format!("Error sending message: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: SendTelegramMessageParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params, &config).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SendTelegramMessageParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: SendTelegramMessageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

impl Default for SendTelegramMessageTool {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
