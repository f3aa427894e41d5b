//! Error types for the Cribl client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Cribl client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with an unexpected status code
    #[error("status code: {status}{}", fmt_message(message))]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the API, possibly empty
        message: String,
    },

    /// The API answered 404, or a lookup returned no items
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The request could not be built from the given arguments
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn fmt_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(" ({})", message)
    }
}

impl ClientError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::Status { status: 404, .. })
    }

    /// HTTP status carried by this error, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_code() {
        assert_eq!(ClientError::status(500, "").to_string(), "status code: 500");
        assert_eq!(
            ClientError::status(400, "bad id").to_string(),
            "status code: 400 (bad id)"
        );
    }

    #[test]
    fn not_found_predicates() {
        assert!(ClientError::NotFound("p1".to_string()).is_not_found());
        assert!(ClientError::status(404, "").is_not_found());
        assert!(!ClientError::status(500, "").is_not_found());
        assert_eq!(
            ClientError::NotFound("p1".to_string()).status_code(),
            Some(404)
        );
        assert_eq!(
            ClientError::InvalidRequest("empty id".to_string()).status_code(),
            None
        );
    }
}
