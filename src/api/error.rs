//! API-specific error types and handling

use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Error types for post service operations.
///
/// Network and decode failures are handled identically downstream: logged,
/// surfaced in the status line, and swallowed without clearing prior state.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid response body: {message}")]
    Decode { message: String },

    #[error("invalid endpoint: {message}")]
    InvalidEndpoint { message: String },
}

impl ApiError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, url: impl Into<String>) -> Self {
        ApiError::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid endpoint error
    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        ApiError::InvalidEndpoint {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = ApiError::unexpected_status(503, "https://example.com/posts");
        assert_eq!(
            err.to_string(),
            "unexpected status 503 from https://example.com/posts"
        );

        let err = ApiError::decode("expected value at line 1");
        assert!(err.to_string().contains("invalid response body"));
    }
}
