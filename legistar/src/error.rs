use legistar_webapi::WebApiError;
use thiserror::Error;

/// Errors that can occur when using the high-level Legistar client
#[derive(Error, Debug)]
pub enum LegistarError {
    /// Error from the underlying web API
    #[error("Legistar web API error: {0}")]
    WebApi(#[from] WebApiError),

    /// HTTP client construction or request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// File I/O error (cache writes and reads)
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload cannot be viewed as rows and columns
    #[error("Payload is not tabular: {message}")]
    Shape { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl LegistarError {
    /// Create a new shape error
    pub fn shape<S: Into<String>>(message: S) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when the failure is the API rejecting the requested resource
    /// (an unknown dataset name, a bad token) rather than a local fault
    pub fn is_rejected_query(&self) -> bool {
        matches!(
            self,
            LegistarError::WebApi(WebApiError::ApiError { status, .. })
                if (400u16..500).contains(status)
        )
    }
}

/// Type alias for Results using LegistarError
pub type Result<T> = std::result::Result<T, LegistarError>;
