//! Wire types for the Telegram Bot API.
//!
//! Only the fields this server actually reads are modeled; the Bot API
//! returns many more, and unknown fields are ignored on deserialization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Chat identifier accepted by the Bot API: a numeric id or a public
/// channel/group name like "@mychannel".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Name(String),
}

impl ChatId {
    /// Parse a configured chat id string. Numeric strings become `Id`,
    /// anything else is passed through verbatim as `Name`.
    pub fn parse(value: &str) -> Self {
        value
            .parse::<i64>()
            .map(Self::Id)
            .unwrap_or_else(|_| Self::Name(value.to_string()))
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Message formatting mode, passed through to the Bot API unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ParseMode {
    Markdown,
    HTML,
}

/// Body of a `sendMessage` call.
///
/// Optional fields must be omitted from the JSON body when unset - the Bot
/// API rejects empty-string parse modes.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

/// Envelope every Bot API method responds with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A sent message as echoed back by the Bot API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message_id: i64,
    #[serde(default)]
    pub date: Option<i64>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message was delivered to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_parse_numeric() {
        assert_eq!(ChatId::parse("123456789"), ChatId::Id(123456789));
        assert_eq!(ChatId::parse("-1001234567890"), ChatId::Id(-1001234567890));
    }

    #[test]
    fn test_chat_id_parse_channel_name() {
        assert_eq!(
            ChatId::parse("@mychannel"),
            ChatId::Name("@mychannel".to_string())
        );
    }

    #[test]
    fn test_chat_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ChatId::Id(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&ChatId::Name("@c".to_string())).unwrap(),
            "\"@c\""
        );
    }

    #[test]
    fn test_send_request_omits_unset_fields() {
        let request = SendMessageRequest {
            chat_id: ChatId::Id(7),
            text: "hello".to_string(),
            parse_mode: None,
            disable_notification: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"chat_id": 7, "text": "hello"}));
    }

    #[test]
    fn test_send_request_includes_set_fields() {
        let request = SendMessageRequest {
            chat_id: ChatId::Id(7),
            text: "hello".to_string(),
            parse_mode: Some(ParseMode::HTML),
            disable_notification: Some(true),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["parse_mode"], "HTML");
        assert_eq!(json["disable_notification"], true);
    }

    #[test]
    fn test_parse_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&ParseMode::Markdown).unwrap(),
            "\"Markdown\""
        );
        assert_eq!(serde_json::to_string(&ParseMode::HTML).unwrap(), "\"HTML\"");
    }

    #[test]
    fn test_api_response_tolerates_minimal_result() {
        let json = r#"{"ok": true, "result": {"chat": {"id": 99}}}"#;
        let response: ApiResponse<Message> = serde_json::from_str(json).unwrap();
        assert!(response.ok);
        assert_eq!(response.result.unwrap().chat.id, 99);
    }

    #[test]
    fn test_api_response_failure_description() {
        let json = r#"{"ok": false, "description": "Bad Request: chat not found"}"#;
        let response: ApiResponse<Message> = serde_json::from_str(json).unwrap();
        assert!(!response.ok);
        assert_eq!(
            response.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }
}
