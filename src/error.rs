use std::fmt;

/// Custom error type for CircleCI operations
#[derive(Debug)]
pub enum CircleError {
    /// Server URL or resource path could not be composed into a URL
    InvalidUrl(String),
    /// Transport failed before a response was received (DNS, connection, timeout)
    Transport(Box<dyn std::error::Error + Send + Sync>),
    /// Success status but the body did not have the expected shape
    MalformedResponse(String),
    /// API returned an error response with a decodable message
    Api { status: u16, message: String },
    /// API returned an error response whose body could not be decoded
    MalformedErrorResponse { status: u16, body: String },
    /// No item with the given name was found on any page
    NotFound { resource: &'static str, name: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for CircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircleError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            CircleError::Transport(e) => write!(f, "HTTP request failed: {}", e),
            CircleError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            CircleError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CircleError::MalformedErrorResponse { status, body } => write!(
                f,
                "API error (status {}) with undecodable error body: {}",
                status, body
            ),
            CircleError::NotFound { resource, name } => {
                write!(f, "Cannot find {} named '{}'", resource, name)
            }
            CircleError::TokenNotFound(msg) => write!(f, "{}", msg),
            CircleError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CircleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CircleError::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CircleError {
    fn from(err: reqwest::Error) -> Self {
        CircleError::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for CircleError {
    fn from(err: serde_json::Error) -> Self {
        CircleError::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for CircleError {
    fn from(err: url::ParseError) -> Self {
        CircleError::InvalidUrl(err.to_string())
    }
}

/// Result type alias for CircleCI operations
pub type Result<T> = std::result::Result<T, CircleError>;
