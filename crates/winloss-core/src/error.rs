//! Error types for the analytics API client and query layer.
//!
//! Every fetch error surfaces as an [`ApiError`]. The variants separate
//! requests that never completed ([`ApiError::Transport`]) from requests
//! that completed with a failure status ([`ApiError::Http`]).

use thiserror::Error;

/// Errors produced while talking to the analytics backend.
///
/// `Clone` so a single failed in-flight request can be handed to every
/// caller attached to it and kept in the cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection refused, CORS, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The request completed with a non-2xx status.
    #[error("API error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The response body was not the JSON shape the caller expected.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// A cached payload was read back as a different type than it was stored with.
    #[error("cached payload for `{0}` has an unexpected type")]
    TypeMismatch(String),
}

impl ApiError {
    /// HTTP status code, present only when the request completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request never reached a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_http() {
        let http = ApiError::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(http.status(), Some(503));
        assert!(!http.is_transport());

        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(transport.status(), None);
        assert!(transport.is_transport());
    }

    #[test]
    fn test_display() {
        let http = ApiError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(http.to_string(), "API error: 404 Not Found");
    }
}
