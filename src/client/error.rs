//! Stats client error types
//!
//! Every way a backend request can fail, plus the coarse three-way
//! classification the views collapse them into.

use thiserror::Error;

/// Errors that can occur when talking to the stats backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, etc.
    #[error("Stats backend unavailable: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Non-2xx response
    #[error("API error {status}: {message}")]
    Http { status: u16, message: String },

    /// 404 from a single-resource endpoint
    #[error("Not found: {0}")]
    NotFound(String),

    /// Body was not JSON or did not match the expected shape
    #[error("Invalid response body: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

/// Coarse failure classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request could not complete
    NetworkFailure,
    /// The backend answered with a non-2xx status
    HttpError,
    /// The body could not be decoded
    ParseFailure,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) | FetchError::Timeout | FetchError::Setup(_) => {
                FetchErrorKind::NetworkFailure
            }
            FetchError::Http { .. } | FetchError::NotFound(_) => FetchErrorKind::HttpError,
            FetchError::Parse(_) => FetchErrorKind::ParseFailure,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Result type alias for backend requests
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Http {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: maintenance");

        let err = FetchError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            FetchError::Network("refused".into()).kind(),
            FetchErrorKind::NetworkFailure
        );
        assert_eq!(FetchError::Timeout.kind(), FetchErrorKind::NetworkFailure);
        assert_eq!(
            FetchError::NotFound("player 9".into()).kind(),
            FetchErrorKind::HttpError
        );
        assert_eq!(
            FetchError::Parse("expected array".into()).kind(),
            FetchErrorKind::ParseFailure
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
