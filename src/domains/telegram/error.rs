//! Telegram-specific error types.

use thiserror::Error;

/// Result type for Bot API operations.
pub type TelegramResult<T> = Result<T, TelegramError>;

/// Errors that can occur while calling the Bot API.
///
/// Both variants surface to the tool caller through the same
/// catch-and-stringify path, so the Display text is the user-visible text.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The Bot API replied with `ok: false`, or `ok: true` without a
    /// result payload.
    #[error("{}", .description.as_deref().unwrap_or("Unknown error"))]
    Api { description: Option<String> },

    /// Network failure, or a response body that was not valid JSON.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl TelegramError {
    /// Create an API error from an optional provider description.
    pub fn api(description: Option<String>) -> Self {
        Self::Api { description }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_description() {
        let err = TelegramError::api(Some("Bad Request: chat not found".to_string()));
        assert_eq!(err.to_string(), "Bad Request: chat not found");
    }

    #[test]
    fn test_api_error_without_description() {
        let err = TelegramError::api(None);
        assert_eq!(err.to_string(), "Unknown error");
    }
}
