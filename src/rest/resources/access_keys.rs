//! Object storage access keys (`resources/object-storage/access-keys`).
//!
//! Access keys grant S3-compatible access to Fastly Object Storage buckets.
//! The secret key is only returned when a key is created.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::access_keys::{self, CreateInput};
//!
//! let key = access_keys::create_access_key(
//!     &client,
//!     &CreateInput {
//!         description: "ci uploads".to_string(),
//!         permission: "read-write-objects".to_string(),
//!         buckets: Some(vec!["artifacts".to_string()]),
//!         ..Default::default()
//!     },
//! )
//! .await?;
//! println!("secret: {:?}", key.secret_key);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{build_path, decode, lenient, ResourceError};

const COLLECTION: &str = "resources/object-storage/access-keys";
const NAMED: &str = "resources/object-storage/access-keys/{access_key_id}";

/// An object storage access key.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AccessKey {
    /// The access key ID.
    #[serde(default)]
    pub access_key: Option<String>,
    /// The secret key; only present in the response to a create.
    #[serde(default)]
    pub secret_key: Option<String>,
    /// Free-form description of the key.
    #[serde(default)]
    pub description: Option<String>,
    /// Permission level, e.g. `read-write-admin` or `read-only-objects`.
    #[serde(default)]
    pub permission: Option<String>,
    /// Buckets the key is restricted to; empty means all buckets.
    #[serde(default)]
    pub buckets: Option<Vec<String>>,
    /// When the key was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A page of access keys.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AccessKeys {
    /// The keys on this page.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub data: Vec<AccessKey>,
    /// Response metadata as returned by the API.
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

/// Input for [`list_access_keys`].
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`get_access_key`].
#[derive(Debug, Clone, Default)]
pub struct GetInput {
    /// The access key ID (required).
    pub access_key_id: String,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`create_access_key`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInput {
    /// A description of the key (required).
    pub description: String,
    /// Permission level of the key (required).
    pub permission: String,
    /// Restricts the key to these buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<String>>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`delete_access_key`].
#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    /// The access key ID (required).
    pub access_key_id: String,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Lists all object storage access keys.
///
/// # Errors
///
/// Returns any transport or decode error.
pub async fn list_access_keys(
    client: &FastlyClient,
    input: &ListInput,
) -> Result<AccessKeys, ResourceError> {
    let options = RequestOptions::default().cancellation(input.cancellation.clone());

    let response = client.get(COLLECTION, options).await?;
    decode(&response, "ListAccessKeys")
}

/// Fetches a single access key.
///
/// # Errors
///
/// Returns [`ResourceError::MissingAccessKeyId`] before sending, or any
/// transport or decode error.
pub async fn get_access_key(
    client: &FastlyClient,
    input: &GetInput,
) -> Result<AccessKey, ResourceError> {
    if input.access_key_id.is_empty() {
        return Err(ResourceError::MissingAccessKeyId);
    }

    let path = build_path(NAMED, &[("access_key_id", input.access_key_id.as_str())]);
    let options = RequestOptions::default().cancellation(input.cancellation.clone());

    let response = client.get(&path, options).await?;
    decode(&response, "GetAccessKey")
}

/// Creates an access key.
///
/// # Errors
///
/// Returns [`ResourceError::MissingDescription`] or
/// [`ResourceError::MissingPermission`] before sending, or any transport,
/// encode or decode error.
pub async fn create_access_key(
    client: &FastlyClient,
    input: &CreateInput,
) -> Result<AccessKey, ResourceError> {
    if input.description.is_empty() {
        return Err(ResourceError::MissingDescription);
    }
    if input.permission.is_empty() {
        return Err(ResourceError::MissingPermission);
    }

    let body = serde_json::to_value(input).map_err(|source| ResourceError::Encode {
        operation: "CreateAccessKey",
        source,
    })?;
    let options = RequestOptions::default().cancellation(input.cancellation.clone());

    let response = client.post_json(COLLECTION, &body, options).await?;
    decode(&response, "CreateAccessKey")
}

/// Deletes an access key.
///
/// The endpoint answers with an empty body; any 2xx status is success.
///
/// # Errors
///
/// Returns [`ResourceError::MissingAccessKeyId`] before sending, or any
/// transport error.
pub async fn delete_access_key(
    client: &FastlyClient,
    input: &DeleteInput,
) -> Result<(), ResourceError> {
    if input.access_key_id.is_empty() {
        return Err(ResourceError::MissingAccessKeyId);
    }

    let path = build_path(NAMED, &[("access_key_id", input.access_key_id.as_str())]);
    let options = RequestOptions::default().cancellation(input.cancellation.clone());

    client.delete(&path, options).await?;
    Ok(())
}
