//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use crate::domains::telegram::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Telegram Bot API configuration.
    pub telegram: TelegramConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the Telegram Bot API.
///
/// A missing token or default chat id is not a startup failure: the
/// `send_telegram_message` tool reports it to the caller instead.
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token issued by @BotFather.
    pub bot_token: Option<String>,

    /// Fallback chat id used when a tool call does not provide one.
    /// Either a numeric id or a channel name like "@mychannel".
    pub default_chat_id: Option<String>,

    /// Base URL of the Bot API. Overridable for proxies and tests.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Custom Debug implementation to redact the bot token from logs.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("default_chat_id", &self.default_chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            default_chat_id: None,
            api_base: default_api_base(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "telegram-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            telegram: TelegramConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server and transport settings use the `MCP_` prefix (for example
    /// `MCP_SERVER_NAME`, `MCP_TRANSPORT`). The Telegram secrets keep their
    /// conventional names: `BOT_TOKEN` and `DEFAULT_CHAT_ID`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load Telegram credentials
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            config.telegram.bot_token = Some(token);
            info!("Bot token loaded from environment");
        } else {
            warn!(
                "BOT_TOKEN is not set - send_telegram_message will report a \
                 configuration error until it is provided"
            );
        }

        if let Ok(chat_id) = std::env::var("DEFAULT_CHAT_ID") {
            config.telegram.default_chat_id = Some(chat_id);
            info!("Default chat id loaded from environment");
        } else {
            warn!(
                "DEFAULT_CHAT_ID is not set - tool calls must provide an \
                 explicit chat_id"
            );
        }

        if let Ok(api_base) = std::env::var("TELEGRAM_API_BASE") {
            info!("Using custom Bot API base URL: {}", api_base);
            config.telegram.api_base = api_base;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("BOT_TOKEN", "123456:test-token");
            std::env::set_var("DEFAULT_CHAT_ID", "-1001234567890");
        }
        let config = Config::from_env();
        assert_eq!(config.telegram.bot_token.as_deref(), Some("123456:test-token"));
        assert_eq!(
            config.telegram.default_chat_id.as_deref(),
            Some("-1001234567890")
        );
        unsafe {
            std::env::remove_var("BOT_TOKEN");
            std::env::remove_var("DEFAULT_CHAT_ID");
        }
    }

    #[test]
    fn test_credentials_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("BOT_TOKEN");
            std::env::remove_var("DEFAULT_CHAT_ID");
        }
        let config = Config::from_env();
        assert!(config.telegram.bot_token.is_none());
        assert!(config.telegram.default_chat_id.is_none());
    }

    #[test]
    fn test_api_base_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TELEGRAM_API_BASE", "http://127.0.0.1:9999");
        }
        let config = Config::from_env();
        assert_eq!(config.telegram.api_base, "http://127.0.0.1:9999");
        unsafe {
            std::env::remove_var("TELEGRAM_API_BASE");
        }
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let telegram = TelegramConfig {
            bot_token: Some("super_secret_token".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", telegram);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_config_default_api_base() {
        let config = Config::default();
        assert_eq!(config.telegram.api_base, "https://api.telegram.org");
    }
}
