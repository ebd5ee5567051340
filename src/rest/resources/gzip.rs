//! Gzip configuration resource implementation.
//!
//! A gzip configuration tells Fastly which responses to compress at the edge,
//! selected by content type and file extension.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::gzip::CreateGzipInput;
//!
//! let gzip = client
//!     .create_gzip(&CreateGzipInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         service_version: 4,
//!         name: Some("text".to_string()),
//!         content_types: Some("text/html text/css".to_string()),
//!         extensions: Some("html css".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{
    decode, ensure_status_ok, lenient, require_named, require_service_version, to_form_body,
    versioned_path, ResourceError,
};

const COLLECTION: &str = "gzip";
const NAMED: &str = "gzip/{name}";

/// A gzip configuration on a service version.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Gzip {
    /// Name of the cache condition controlling when this applies.
    #[serde(default)]
    pub cache_condition: Option<String>,

    /// Space-separated content types to compress.
    #[serde(default)]
    pub content_types: Option<String>,

    /// When it was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When it was deleted, if it was.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,

    /// Space-separated file extensions to compress.
    #[serde(default)]
    pub extensions: Option<String>,

    /// Name of the gzip configuration.
    #[serde(default)]
    pub name: Option<String>,

    /// The service this belongs to.
    #[serde(default)]
    pub service_id: Option<String>,

    /// The service version this belongs to.
    #[serde(
        rename = "version",
        default,
        deserialize_with = "lenient::option_number"
    )]
    pub service_version: Option<u32>,

    /// When it was last changed.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for [`FastlyClient::list_gzips`].
#[derive(Debug, Clone, Default)]
pub struct ListGzipsInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::create_gzip`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGzipInput {
    /// The ID of the service (required).
    #[serde(skip)]
    pub service_id: String,
    /// The service version (required).
    #[serde(skip)]
    pub service_version: u32,
    /// Name of the cache condition controlling when this applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_condition: Option<String>,
    /// Space-separated content types to compress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_types: Option<String>,
    /// Space-separated file extensions to compress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<String>,
    /// Name of the new gzip configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::get_gzip`].
#[derive(Debug, Clone, Default)]
pub struct GetGzipInput {
    /// The name of the gzip configuration (required).
    pub name: String,
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::update_gzip`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateGzipInput {
    /// The current name of the gzip configuration (required).
    #[serde(skip)]
    pub name: String,
    /// The ID of the service (required).
    #[serde(skip)]
    pub service_id: String,
    /// The service version (required).
    #[serde(skip)]
    pub service_version: u32,
    /// Name of the cache condition controlling when this applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_condition: Option<String>,
    /// Space-separated content types to compress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_types: Option<String>,
    /// Space-separated file extensions to compress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<String>,
    /// Renames the gzip configuration.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::delete_gzip`].
#[derive(Debug, Clone, Default)]
pub struct DeleteGzipInput {
    /// The name of the gzip configuration (required).
    pub name: String,
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

impl FastlyClient {
    /// Lists the gzip configurations of a service version.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn list_gzips(&self, input: &ListGzipsInput) -> Result<Vec<Gzip>, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, COLLECTION, None);
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "ListGzips")
    }

    /// Creates a gzip configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn create_gzip(&self, input: &CreateGzipInput) -> Result<Gzip, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, COLLECTION, None);
        let form = to_form_body(input, "CreateGzip")?;
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.post_form(&path, form, options).await?;
        decode(&response, "CreateGzip")
    }

    /// Fetches a gzip configuration by name.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn get_gzip(&self, input: &GetGzipInput) -> Result<Gzip, ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            NAMED,
            Some(&input.name),
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "GetGzip")
    }

    /// Updates a gzip configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn update_gzip(&self, input: &UpdateGzipInput) -> Result<Gzip, ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            NAMED,
            Some(&input.name),
        );
        let form = to_form_body(input, "UpdateGzip")?;
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.put_form(&path, form, options).await?;
        decode(&response, "UpdateGzip")
    }

    /// Deletes a gzip configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, [`ResourceError::NotOk`] if
    /// the deletion is not confirmed, or any transport or decode error.
    pub async fn delete_gzip(&self, input: &DeleteGzipInput) -> Result<(), ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            NAMED,
            Some(&input.name),
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.delete(&path, options).await?;
        ensure_status_ok(&response, "DeleteGzip")
    }
}
