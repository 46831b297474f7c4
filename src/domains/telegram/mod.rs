//! Telegram domain module.
//!
//! This module contains the outbound Bot API client and the wire types it
//! exchanges with `https://api.telegram.org`. The client performs exactly one
//! HTTP call per send: no retries, no queuing, no rate-limit handling.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_BASE, TelegramClient};
pub use error::{TelegramError, TelegramResult};
pub use types::{ApiResponse, Chat, ChatId, Message, ParseMode, SendMessageRequest};
