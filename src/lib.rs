//! Telegram Notification MCP Server
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! Telegram Bot API notifications as a callable tool.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **telegram**: Outbound Bot API client (the message sender)
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use telegram_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
