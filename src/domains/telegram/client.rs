//! Outbound Bot API client.
//!
//! One HTTP POST per send. Timeouts and cancellation are whatever reqwest
//! provides; there is no retry or rate-limit handling here.

use tracing::{debug, warn};

use super::error::{TelegramError, TelegramResult};
use super::types::{ApiResponse, Message, SendMessageRequest};

/// Production Bot API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Client for the Telegram Bot API.
///
/// Cheap to construct per call; holds no state beyond the token and the
/// reqwest connection pool.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

/// Custom Debug implementation to keep the token out of logs.
impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl TelegramClient {
    /// Create a client against the production Bot API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a client against a custom base URL (proxies, tests).
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Send a message via the `sendMessage` method.
    ///
    /// Returns the provider's message record on success. An `ok: false`
    /// reply becomes `TelegramError::Api` carrying the provider description;
    /// network and decode failures become `TelegramError::Transport`.
    pub async fn send_message(&self, request: &SendMessageRequest) -> TelegramResult<Message> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);

        debug!(chat_id = %request.chat_id, "Calling Bot API sendMessage");

        let response = self.http.post(&url).json(request).send().await?;
        let api: ApiResponse<Message> = response.json().await?;

        if !api.ok {
            warn!(
                "Bot API rejected sendMessage: {}",
                api.description.as_deref().unwrap_or("Unknown error")
            );
            return Err(TelegramError::api(api.description));
        }

        api.result.ok_or_else(|| TelegramError::api(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::telegram::types::ChatId;
    use axum::{Json, Router, routing::post};
    use std::sync::{Arc, Mutex};

    /// Spawn a simulated Bot API that answers every POST with `body` and
    /// records the request bodies it receives.
    async fn spawn_provider(
        body: serde_json::Value,
    ) -> (String, Arc<Mutex<Vec<serde_json::Value>>>) {
        let captured: Arc<Mutex<Vec<serde_json::Value>>> = Arc::default();
        let state = (body, captured.clone());

        let app = Router::new().route(
            "/{*path}",
            post(move |Json(request): Json<serde_json::Value>| {
                let (body, captured) = state.clone();
                async move {
                    captured.lock().unwrap().push(request);
                    Json(body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), captured)
    }

    fn request(chat_id: i64, text: &str) -> SendMessageRequest {
        SendMessageRequest {
            chat_id: ChatId::Id(chat_id),
            text: text.to_string(),
            parse_mode: None,
            disable_notification: None,
        }
    }

    #[tokio::test]
    async fn test_send_message_success() {
        let (base, captured) = spawn_provider(serde_json::json!({
            "ok": true,
            "result": {"message_id": 5, "chat": {"id": 42, "type": "private"}}
        }))
        .await;

        let client = TelegramClient::with_api_base("123:abc", base);
        let message = client.send_message(&request(42, "hello")).await.unwrap();

        assert_eq!(message.chat.id, 42);
        assert_eq!(message.message_id, 5);

        let bodies = captured.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["chat_id"], 42);
        assert_eq!(bodies[0]["text"], "hello");
        assert!(bodies[0].get("parse_mode").is_none());
    }

    #[tokio::test]
    async fn test_send_message_api_rejection() {
        let (base, _captured) = spawn_provider(serde_json::json!({
            "ok": false,
            "description": "Bad Request: chat not found"
        }))
        .await;

        let client = TelegramClient::with_api_base("123:abc", base);
        let err = client.send_message(&request(42, "hello")).await.unwrap_err();

        assert_eq!(err.to_string(), "Bad Request: chat not found");
    }

    #[tokio::test]
    async fn test_send_message_rejection_without_description() {
        let (base, _captured) = spawn_provider(serde_json::json!({"ok": false})).await;

        let client = TelegramClient::with_api_base("123:abc", base);
        let err = client.send_message(&request(42, "hello")).await.unwrap_err();

        assert_eq!(err.to_string(), "Unknown error");
    }

    #[tokio::test]
    async fn test_send_message_ok_without_result() {
        let (base, _captured) = spawn_provider(serde_json::json!({"ok": true})).await;

        let client = TelegramClient::with_api_base("123:abc", base);
        let err = client.send_message(&request(42, "hello")).await.unwrap_err();

        assert_eq!(err.to_string(), "Unknown error");
    }

    #[tokio::test]
    async fn test_send_message_connection_refused() {
        // Nothing is listening on this port; bind-then-drop reserves one.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TelegramClient::with_api_base("123:abc", format!("http://{}", addr));
        let result = client.send_message(&request(42, "hello")).await;

        assert!(matches!(result, Err(TelegramError::Transport(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = TelegramClient::new("super_secret_token");
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
