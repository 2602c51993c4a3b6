use serde_json::Value;
use thiserror::Error;

/// Main error type for Mailgun API operations
#[derive(Debug, Error)]
pub enum MailgunError {
    /// Client could not be configured (no API key supplied)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required argument was missing or malformed
    #[error("invalid argument: {0}")]
    Argument(String),

    /// No explicit domain and no default domain configured
    #[error("You need to either specify a domain in the initial config or when calling this method")]
    DomainRequired,

    /// Non-200 response; `body` is the server's JSON error envelope verbatim
    #[error("Mailgun API error {status}: {body}")]
    Api { status: u16, body: Value },

    /// The request could not be completed at the connection level
    #[error("{operation}() Problem connecting: {message}")]
    Transport { operation: String, message: String },

    /// A multipart field was built with a missing name or value
    #[error("invalid form field: {0}")]
    InvalidField(String),

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// IO error while reading an attachment
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MailgunError {
    /// Create a new argument error
    pub fn argument(message: impl Into<String>) -> Self {
        MailgunError::Argument(message.into())
    }

    /// Create a new transport error for the named operation
    pub fn transport(operation: &str, message: impl std::fmt::Display) -> Self {
        MailgunError::Transport {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, MailgunError::Api { status: 404, .. })
    }

    /// Check if the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, MailgunError::Transport { .. })
    }

    /// Get the HTTP status code if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MailgunError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the `message` field of the server's error envelope, if any
    pub fn api_message(&self) -> Option<&str> {
        match self {
            MailgunError::Api { body, .. } => body.get("message").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Result type for Mailgun operations
pub type Result<T> = std::result::Result<T, MailgunError>;
