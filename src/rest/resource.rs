//! Shared request plumbing for resource operations.
//!
//! Every resource operation follows the same steps: validate the required
//! fields, build the path, send one request, then decode the body. This
//! module holds the validation and decoding halves.
//!
//! # Example
//!
//! ```rust
//! use fastly_api::rest::{require_named, ResourceError};
//!
//! // Name is checked first, then service ID, then version.
//! assert!(matches!(require_named("", "", 0), Err(ResourceError::MissingName)));
//! assert!(matches!(require_named("foo", "", 0), Err(ResourceError::MissingServiceId)));
//! assert!(matches!(require_named("foo", "abc", 0), Err(ResourceError::MissingServiceVersion)));
//! assert!(require_named("foo", "abc", 1).is_ok());
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// Status payload returned by delete endpoints, e.g. `{"status": "ok"}`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    /// The reported status.
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusResponse {
    /// Returns `true` only when the status is exactly `"ok"`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }
}

/// Decodes a JSON response body into `T`.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] naming `operation` if the body is not
/// valid JSON for `T`.
pub fn decode<T: DeserializeOwned>(
    response: &HttpResponse,
    operation: &'static str,
) -> Result<T, ResourceError> {
    serde_json::from_str(&response.body)
        .map_err(|source| ResourceError::Decode { operation, source })
}

/// Decodes a status payload and requires it to be `"ok"`.
///
/// # Errors
///
/// Returns [`ResourceError::NotOk`] for any other status, including a
/// missing one, and [`ResourceError::Decode`] for a malformed body.
pub fn ensure_status_ok(
    response: &HttpResponse,
    operation: &'static str,
) -> Result<(), ResourceError> {
    let status: StatusResponse = decode(response, operation)?;

    if status.is_ok() {
        return Ok(());
    }

    tracing::warn!(
        operation,
        status = ?status.status,
        "Fastly API returned a non-ok status"
    );
    Err(ResourceError::NotOk)
}

/// Validates the service ID, then the service version.
///
/// # Errors
///
/// Returns [`ResourceError::MissingServiceId`] or
/// [`ResourceError::MissingServiceVersion`].
pub fn require_service_version(service_id: &str, service_version: u32) -> Result<(), ResourceError> {
    if service_id.is_empty() {
        return Err(ResourceError::MissingServiceId);
    }
    if service_version == 0 {
        return Err(ResourceError::MissingServiceVersion);
    }
    Ok(())
}

/// Validates the name of a single resource, then its service and version.
///
/// # Errors
///
/// Returns [`ResourceError::MissingName`], or the errors of
/// [`require_service_version`].
pub fn require_named(
    name: &str,
    service_id: &str,
    service_version: u32,
) -> Result<(), ResourceError> {
    if name.is_empty() {
        return Err(ResourceError::MissingName);
    }
    require_service_version(service_id, service_version)
}
