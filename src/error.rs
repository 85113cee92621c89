//! Error types for Meraki API operations.

use thiserror::Error;

/// Errors that can occur during Meraki API operations.
#[derive(Debug, Error)]
pub enum MerakiError {
    /// Configuration is missing or incomplete.
    #[error("Meraki configuration required: {0}")]
    ConfigMissing(String),

    /// Authentication, authorization or rate-limit failure (401, 403, 429).
    ///
    /// Callers are expected to stop issuing requests after this.
    #[error("Fatal Meraki API error: {status} - {body}")]
    Fatal { status: u16, body: String },

    /// The request was rejected by the API (400, 404).
    #[error("Meraki API request error: {status} - {body}")]
    Request { status: u16, body: String },

    /// Any other non-success status.
    #[error("Unexpected Meraki API status: {status} - {body}")]
    Api { status: u16, body: String },

    /// Entity not found by a client-side lookup.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Invalid input detected before a request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Reading a request body from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MerakiError {
    /// Whether this error belongs to the fatal status class.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }

    /// The HTTP status code, if the error came from an API response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fatal { status, .. } | Self::Request { status, .. } | Self::Api { status, .. } => {
                Some(*status)
            }
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Meraki operations.
pub type Result<T> = core::result::Result<T, MerakiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let err = MerakiError::Fatal {
            status: 401,
            body: "Invalid API key".to_string(),
        };
        assert!(err.is_fatal());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Fatal Meraki API error: 401 - Invalid API key");
    }

    #[test]
    fn test_request_error_is_not_fatal() {
        let err = MerakiError::Request {
            status: 404,
            body: String::new(),
        };
        assert!(!err.is_fatal());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_not_found_has_no_status() {
        let err = MerakiError::NotFound {
            entity_type: "Organization",
            id: "Acme".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Organization 'Acme' not found");
    }
}
