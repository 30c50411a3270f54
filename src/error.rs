//! Error types surfaced by the resource clients.
//!
//! Two kinds reach the caller: a request failure (the exchange could not be
//! built, sent, read or decoded, or local input was rejected) and an API
//! error (the exchange completed but the envelope reported `ok = false`).

use std::num::ParseIntError;
use thiserror::Error;

/// Boxed error returned by [`HttpSend`](crate::transport::HttpSend) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures that happen before, during or right after the HTTP exchange.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The endpoint and resource did not form a valid URL.
    #[error("failed to create HTTP request object: {0}")]
    Url(#[from] url::ParseError),

    /// A header value contained bytes that are not valid in HTTP headers.
    #[error("failed to create HTTP request object: invalid {name} header: {source}")]
    Header {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// An ID cannot be used as a single path segment.
    #[error("invalid resource id '{0}'")]
    InvalidId(String),

    /// The HMAC could not be keyed.
    #[error("failed to sign request: {0}")]
    Signing(String),

    /// The default HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The underlying sender failed.
    #[error("request failed: {0}")]
    Send(#[source] BoxError),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The request body could not be serialized.
    #[error("failed to JSON marshal request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A definition carried a version string that is not an integer.
    #[error("invalid version {version}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: ParseIntError,
    },
}

/// Error returned by every [`Client`](crate::Client) operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The server answered with `ok = false`.
    #[error("{}", api_message(.status))]
    Api { status: u16 },
}

fn api_message(status: &u16) -> String {
    if *status > 0 {
        format!("received status code {} from server", status)
    } else {
        String::new()
    }
}

impl Error {
    /// Status code reported by the server, only present for API errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status } => Some(*status),
            Error::Request(_) => None,
        }
    }

    /// True when the server completed the exchange but rejected the call.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api { status: 404 };
        assert_eq!(err.to_string(), "received status code 404 from server");
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_api_error());
    }

    #[test]
    fn test_api_error_without_status_is_empty() {
        assert_eq!(Error::Api { status: 0 }.to_string(), "");
    }

    #[test]
    fn test_request_error_uses_cause_message() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = Error::from(RequestError::InvalidVersion {
            version: "abc".to_string(),
            source,
        });
        assert!(err.to_string().starts_with("invalid version abc"));
        assert_eq!(err.status_code(), None);
        assert!(!err.is_api_error());
    }

    #[test]
    fn test_send_error_wraps_cause() {
        let cause: BoxError = "connection refused".into();
        let err = Error::from(RequestError::Send(cause));
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn test_client_build_error_is_not_a_send_error() {
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = Error::from(RequestError::Client(source));
        assert!(matches!(err, Error::Request(RequestError::Client(_))));
        assert!(err.to_string().starts_with("failed to build HTTP client"));
    }
}
