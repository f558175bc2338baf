//! Error types for Atlas API calls
//!
//! Every failure is surfaced synchronously to the caller as a typed error;
//! nothing is retried or swallowed inside the client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Atlas client
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure: DNS, connect, TLS, or the digest handshake
    /// itself. No response was available.
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// A response arrived, but its status code differs from the one the
    /// operation documents. Carries the raw body text for diagnostics.
    #[error("got status {status} instead of {expected}: {body}")]
    RequestFailed {
        status: StatusCode,
        expected: StatusCode,
        body: String,
    },

    /// The response body could not be decoded into the expected shape
    /// (malformed JSON or a missing `results` envelope key).
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for Atlas client operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The actual status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server answered 404 for this request.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true if the server rejected the credentials (401/403).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(s) if s == StatusCode::UNAUTHORIZED || s == StatusCode::FORBIDDEN
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

impl From<diqwest::error::Error> for Error {
    fn from(err: diqwest::error::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_failed(status: StatusCode) -> Error {
        Error::RequestFailed {
            status,
            expected: StatusCode::OK,
            body: "{\"detail\":\"nope\"}".to_string(),
        }
    }

    #[test]
    fn test_request_failed_display_includes_both_codes_and_body() {
        let err = request_failed(StatusCode::BAD_REQUEST);
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("200"));
        assert!(msg.contains("nope"));
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(request_failed(StatusCode::NOT_FOUND).is_not_found());
        assert!(!request_failed(StatusCode::BAD_REQUEST).is_not_found());
    }

    #[test]
    fn test_unauthorized_predicate() {
        assert!(request_failed(StatusCode::UNAUTHORIZED).is_unauthorized());
        assert!(request_failed(StatusCode::FORBIDDEN).is_unauthorized());
        assert!(!request_failed(StatusCode::NOT_FOUND).is_unauthorized());
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.status().is_none());
        assert!(!err.is_not_found());
    }
}
