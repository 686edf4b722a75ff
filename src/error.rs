//! Error types and result handling.
//!
//! The error type is a tagged union over the ways a call through the
//! data-access layer can fail:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`ApiError::Http`] | The backend answered with a non-success status |
//! | [`ApiError::Transport`] | The request never produced a response |
//! | [`ApiError::Decode`] | A success body was not valid JSON for the expected type |
//! | [`ApiError::EmptyBody`] | A success status other than 204 arrived with no body |
//! | [`ApiError::InvalidBaseUrl`] | A configured base URL failed to parse |
//!
//! `Http` carries the status code, the message derived from the backend's
//! error envelope, and the raw envelope itself so callers can inspect
//! field-level details. 204 is the only success status allowed to have an
//! empty body; any other empty success body is a backend contract violation
//! and surfaces as `EmptyBody`.

use thiserror::Error;

use crate::types::ErrorEnvelope;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors raised by the fetch wrappers and passed through unchanged by the
/// typed resource client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code of the failed response.
        status: u16,
        /// Message derived from the envelope (`message`, then `error`,
        /// then a generic `HTTP <status> error` fallback).
        message: String,
        /// The raw error envelope as sent by the backend.
        envelope: ErrorEnvelope,
    },

    /// The request never completed: connection failure, timeout, or a
    /// broken response stream.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The URL the wrapper attempted to reach.
        url: String,
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The backend returned a success status but the body could not be
    /// decoded into the expected type.
    #[error("invalid response body from {url}: {source}")]
    Decode {
        /// The URL that produced the undecodable body.
        url: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A success status other than 204 arrived with an empty body.
    #[error("HTTP {status} response from {url} had no body")]
    EmptyBody {
        /// Status code of the offending response.
        status: u16,
        /// The URL that produced it.
        url: String,
    },

    /// A base URL handed to a config constructor failed to parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Status code of the response, for variants that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::EmptyBody { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is an HTTP 404 from the backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: 404,
            message: "todo not found".to_string(),
            envelope: ErrorEnvelope::default(),
        };
        assert_eq!(err.to_string(), "HTTP 404: todo not found");
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Http {
            status: 500,
            message: "boom".to_string(),
            envelope: ErrorEnvelope::default(),
        };
        assert_eq!(err.status(), Some(500));

        let err = ApiError::EmptyBody {
            status: 200,
            url: "http://localhost/todos".to_string(),
        };
        assert_eq!(err.status(), Some(200));

        let err = ApiError::InvalidBaseUrl(url::ParseError::EmptyHost);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_is_not_found() {
        let err = ApiError::Http {
            status: 404,
            message: "todo not found".to_string(),
            envelope: ErrorEnvelope::default(),
        };
        assert!(err.is_not_found());

        let err = ApiError::Http {
            status: 500,
            message: "boom".to_string(),
            envelope: ErrorEnvelope::default(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_empty_body_display() {
        let err = ApiError::EmptyBody {
            status: 200,
            url: "http://localhost/todos/1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 200 response from http://localhost/todos/1 had no body"
        );
    }
}
