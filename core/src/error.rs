//! Core error types for the Workflow API client
//!
//! [`ApiError`] is the engine's own answer to a request it refused. Everything
//! else (transport, decoding, configuration) is a [`CoreError`] variant.

use serde_json::Value;

/// A non-success HTTP answer from the workflow engine.
///
/// The status code is kept verbatim. The message is pulled out of the
/// engine's error payload when it has one, otherwise the raw body is used.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code returned by the engine
    pub status: u16,
    /// Human readable message extracted from the response body
    pub message: String,
    /// Response body parsed as JSON, when it was JSON
    pub content: Option<Value>,
}

/// Payload fields the engine uses for its error text, in lookup order.
const MESSAGE_FIELDS: [&str; 4] = ["message", "detail", "title", "error"];

impl ApiError {
    /// Create an error with an explicit message and no content.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            content: None,
        }
    }

    /// Build an error from a raw response body.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let content = serde_json::from_str::<Value>(body).ok();

        let message = content
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    trimmed.to_string()
                }
            });

        Self {
            status,
            message,
            content,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

fn extract_message(content: &Value) -> Option<String> {
    match content {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => MESSAGE_FIELDS
            .iter()
            .filter_map(|field| map.get(*field))
            .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
            .map(str::to_string),
        _ => None,
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Core error type for Workflow API operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The engine answered with a non-success status
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token acquisition failed
    #[error("Authentication error: {0}")]
    Auth(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
