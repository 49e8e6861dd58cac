//! Error types

/// Message carried by every [`FetchError::Http`].
pub const HTTP_ERROR_MESSAGE: &str = "An error occurred while fetching the data.";

/// Errors that can occur while fetching from the API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Human-readable message.
        message: String,
        /// Parsed response body, for diagnostics.
        info: serde_json::Value,
        /// HTTP status code.
        status: u16,
    },

    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The path could not be resolved to a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("Invalid header '{name}'")]
    InvalidHeader { name: String },

    /// Failed to parse the response body.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl FetchError {
    /// Creates an HTTP error with the standard message.
    pub fn http(status: u16, info: serde_json::Value) -> Self {
        Self::Http {
            message: HTTP_ERROR_MESSAGE.to_string(),
            info,
            status,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the parsed error body if this is an HTTP error.
    pub fn info(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http { info, .. } => Some(info),
            _ => None,
        }
    }
}
