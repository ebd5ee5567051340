//! HTTP-specific error types for the Fastly API SDK.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::clients::HttpError;
//!
//! match client.get("service", RequestOptions::default()).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Cancelled) => println!("Cancelled"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` is built from the `msg`, `detail` and `title` fields of the
/// Fastly error body when present, or the raw body otherwise.
///
/// # Example
///
/// ```rust
/// use fastly_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Record not found".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: Record not found");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable error message extracted from the response body.
    pub message: String,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// The request path is empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller's cancellation token fired before a response arrived.
    #[error("Request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status code when the error came from an API response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Record not found".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 404: Record not found");
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
        assert_eq!(
            InvalidHttpRequestError::EmptyPath.to_string(),
            "Request path cannot be empty."
        );
    }

    #[test]
    fn test_status_code_only_for_response_errors() {
        let error = HttpError::Response(HttpResponseError {
            code: 503,
            message: "unavailable".to_string(),
        });
        assert_eq!(error.status_code(), Some(503));
        assert_eq!(HttpError::Cancelled.status_code(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
        };
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid_error;

        let cancelled: &dyn std::error::Error = &HttpError::Cancelled;
        let _ = cancelled;
    }
}
