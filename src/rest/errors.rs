//! Resource-specific error types for Fastly API operations.
//!
//! Every resource operation returns [`ResourceError`]. Validation failures
//! are reported before any request is sent; transport failures are wrapped
//! unchanged in [`ResourceError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::ResourceError;
//!
//! match client.get_condition(&input).await {
//!     Ok(condition) => println!("Found: {:?}", condition.name),
//!     Err(ResourceError::MissingName) => println!("a condition name is required"),
//!     Err(ResourceError::Http(e)) if e.status_code() == Some(404) => println!("no such condition"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for Fastly resource operations.
///
/// # Example
///
/// ```rust
/// use fastly_api::rest::ResourceError;
///
/// let error = ResourceError::MissingServiceId;
/// assert_eq!(error.to_string(), "missing required field 'ServiceID'");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The domain to check was empty.
    #[error("missing required field 'Domain'")]
    MissingDomain,

    /// The surrogate key to purge was empty.
    #[error("missing required field 'Key'")]
    MissingKey,

    /// The list of surrogate keys to purge was empty.
    #[error("missing required field 'Keys'")]
    MissingKeys,

    /// The resource name was empty.
    #[error("missing required field 'Name'")]
    MissingName,

    /// The service ID was empty.
    #[error("missing required field 'ServiceID'")]
    MissingServiceId,

    /// The service version was zero.
    #[error("missing required field 'ServiceVersion'")]
    MissingServiceVersion,

    /// The URL to purge was empty.
    #[error("missing required field 'URL'")]
    MissingUrl,

    /// The access key ID was empty.
    #[error("missing required field 'AccessKeyID'")]
    MissingAccessKeyId,

    /// The access key description was empty.
    #[error("missing required field 'Description'")]
    MissingDescription,

    /// The access key permission was empty.
    #[error("missing required field 'Permission'")]
    MissingPermission,

    /// The API answered a delete with a status other than `"ok"`.
    #[error("received a non-ok status from the API")]
    NotOk,

    /// The response body could not be decoded.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        /// The operation whose response failed to decode.
        operation: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be encoded.
    #[error("failed to encode {operation} request: {source}")]
    Encode {
        /// The operation whose request failed to encode.
        operation: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns `true` for errors raised before any request was sent because a
    /// required field was missing.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingDomain
                | Self::MissingKey
                | Self::MissingKeys
                | Self::MissingName
                | Self::MissingServiceId
                | Self::MissingServiceVersion
                | Self::MissingUrl
                | Self::MissingAccessKeyId
                | Self::MissingDescription
                | Self::MissingPermission
        )
    }

    /// Returns the HTTP status code if the API rejected the request.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_field_messages_name_the_field() {
        assert_eq!(
            ResourceError::MissingServiceVersion.to_string(),
            "missing required field 'ServiceVersion'"
        );
        assert_eq!(
            ResourceError::MissingUrl.to_string(),
            "missing required field 'URL'"
        );
        assert_eq!(
            ResourceError::MissingAccessKeyId.to_string(),
            "missing required field 'AccessKeyID'"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(ResourceError::MissingKeys.is_validation());
        assert!(ResourceError::MissingPermission.is_validation());
        assert!(!ResourceError::NotOk.is_validation());
        assert!(!ResourceError::Http(HttpError::Cancelled).is_validation());
    }

    #[test]
    fn test_decode_error_names_operation() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ResourceError::Decode {
            operation: "GetCondition",
            source,
        };

        let message = error.to_string();
        assert!(message.starts_with("failed to decode GetCondition response"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_http_error_is_transparent() {
        let error: ResourceError = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Record not found".to_string(),
        })
        .into();

        assert_eq!(error.to_string(), "HTTP 404: Record not found");
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(ResourceError::NotOk.status_code(), None);
    }
}
