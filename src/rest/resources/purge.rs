//! Cache purging.
//!
//! Purges remove content from the Fastly cache, either a single URL, the
//! objects tagged with one or more surrogate keys, or everything a service
//! has cached. A soft purge marks content stale instead of evicting it.
//!
//! Purge-by-URL, by-key and by-keys requests are sent in parallel with other
//! mutating requests; purge-all waits its turn.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::purge::{PurgeInput, PurgeKeysInput};
//!
//! client
//!     .purge(&PurgeInput {
//!         url: "https://www.example.com/images/logo.png?v=2".to_string(),
//!         soft: true,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let ids = client
//!     .purge_keys(&PurgeKeysInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         keys: vec!["product-42".to_string(), "category-7".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{build_path, decode, ResourceError};

/// Header that turns a purge into a soft purge.
pub const SOFT_PURGE_HEADER: &str = "Fastly-Soft-Purge";

/// Header carrying the space-separated surrogate keys of a multi-key purge.
pub const SURROGATE_KEY_HEADER: &str = "Surrogate-Key";

/// The result of a purge request.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Purge {
    /// Unique ID of the purge request.
    #[serde(default)]
    pub id: Option<String>,
    /// Status of the purge, usually `"ok"`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Input for [`FastlyClient::purge`].
#[derive(Debug, Clone, Default)]
pub struct PurgeInput {
    /// The URL to purge (required).
    pub url: String,
    /// Performs a soft purge.
    pub soft: bool,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::purge_key`].
#[derive(Debug, Clone, Default)]
pub struct PurgeKeyInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// The surrogate key to purge (required).
    pub key: String,
    /// Performs a soft purge.
    pub soft: bool,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::purge_keys`].
#[derive(Debug, Clone, Default)]
pub struct PurgeKeysInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// The surrogate keys to purge (required, non-empty).
    pub keys: Vec<String>,
    /// Performs a soft purge.
    pub soft: bool,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::purge_all`].
#[derive(Debug, Clone, Default)]
pub struct PurgeAllInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// Performs a soft purge.
    pub soft: bool,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

fn purge_options(soft: bool, parallel: bool, cancellation: Option<CancellationToken>) -> RequestOptions {
    let options = RequestOptions::default()
        .parallel(parallel)
        .cancellation(cancellation);

    if soft {
        options.header(SOFT_PURGE_HEADER, "1")
    } else {
        options
    }
}

/// Splits a purge target into the part used in the path and its query pairs.
///
/// The query is dropped from the path and returned as pairs, keeping the
/// first value of each key in order of appearance. A fragment is discarded.
fn split_purge_target(target: &str) -> (&str, Vec<(String, String)>) {
    let target = target.split_once('#').map_or(target, |(before, _)| before);

    let Some((base, query)) = target.split_once('?') else {
        return (target, Vec::new());
    };

    let mut params: Vec<(String, String)> = Vec::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if !params.iter().any(|(k, _)| *k == key) {
            params.push((key.into_owned(), value.into_owned()));
        }
    }

    (base, params)
}

impl FastlyClient {
    /// Purges a single URL.
    ///
    /// The URL's query string is sent as request query parameters so it
    /// reaches the API intact.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingUrl`] before sending, or any
    /// transport or decode error.
    pub async fn purge(&self, input: &PurgeInput) -> Result<Purge, ResourceError> {
        if input.url.is_empty() {
            return Err(ResourceError::MissingUrl);
        }

        let (target, params) = split_purge_target(&input.url);
        let path = format!("purge/{target}");

        let mut options = purge_options(input.soft, true, input.cancellation.clone());
        options.params = params;

        let response = self.post(&path, options).await?;
        decode(&response, "Purge")
    }

    /// Purges the objects tagged with a surrogate key.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingServiceId`] or
    /// [`ResourceError::MissingKey`] before sending, or any transport or
    /// decode error.
    pub async fn purge_key(&self, input: &PurgeKeyInput) -> Result<Purge, ResourceError> {
        if input.service_id.is_empty() {
            return Err(ResourceError::MissingServiceId);
        }
        if input.key.is_empty() {
            return Err(ResourceError::MissingKey);
        }

        let path = build_path(
            "service/{service_id}/purge/{key}",
            &[("service_id", input.service_id.as_str()), ("key", input.key.as_str())],
        );
        let options = purge_options(input.soft, true, input.cancellation.clone());

        let response = self.post(&path, options).await?;
        decode(&response, "PurgeKey")
    }

    /// Purges the objects tagged with any of several surrogate keys.
    ///
    /// Returns a map of surrogate key to purge ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingServiceId`] or
    /// [`ResourceError::MissingKeys`] before sending, or any transport or
    /// decode error.
    pub async fn purge_keys(
        &self,
        input: &PurgeKeysInput,
    ) -> Result<HashMap<String, String>, ResourceError> {
        if input.service_id.is_empty() {
            return Err(ResourceError::MissingServiceId);
        }
        if input.keys.is_empty() {
            return Err(ResourceError::MissingKeys);
        }

        let path = build_path(
            "service/{service_id}/purge",
            &[("service_id", input.service_id.as_str())],
        );
        let options = purge_options(input.soft, true, input.cancellation.clone())
            .header(SURROGATE_KEY_HEADER, input.keys.join(" "));

        let response = self.post(&path, options).await?;
        decode(&response, "PurgeKeys")
    }

    /// Purges everything a service has cached.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingServiceId`] before sending, or any
    /// transport or decode error.
    pub async fn purge_all(&self, input: &PurgeAllInput) -> Result<Purge, ResourceError> {
        if input.service_id.is_empty() {
            return Err(ResourceError::MissingServiceId);
        }

        let path = build_path(
            "service/{service_id}/purge_all",
            &[("service_id", input.service_id.as_str())],
        );
        let options = purge_options(input.soft, false, input.cancellation.clone());

        let response = self.post(&path, options).await?;
        decode(&response, "PurgeAll")
    }
}
