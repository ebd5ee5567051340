//! Historical stats and usage (`stats/...`).
//!
//! Stats are aggregated per time bucket (`by`: minute, hour or day) over a
//! window (`from`/`to`, which accept values like `"10 days ago"` or `"now"`),
//! optionally restricted to a service, a single field and a region.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::stats::GetStatsInput;
//!
//! let stats = client
//!     .get_stats(&GetStatsInput {
//!         service: Some("SU1Z0isxPaozGVKXdv0eY".to_string()),
//!         from: Some("1 day ago".to_string()),
//!         to: Some("now".to_string()),
//!         by: Some("hour".to_string()),
//!         region: Some("europe".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for bucket in &stats.data {
//!     println!("{:?} requests, hit ratio {:?}", bucket.requests, bucket.hit_ratio);
//! }
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{build_path, decode, lenient, ResourceError};

/// Filters for a stats query. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct GetStatsInput {
    /// Restricts stats to one service.
    pub service: Option<String>,
    /// Restricts stats to one field, e.g. `bandwidth`.
    pub field: Option<String>,
    /// Start of the window.
    pub from: Option<String>,
    /// End of the window.
    pub to: Option<String>,
    /// Bucket size: `minute`, `hour` or `day`.
    pub by: Option<String>,
    /// Region to report, e.g. `usa`, `europe` or `all`.
    pub region: Option<String>,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Filters for a usage query.
#[derive(Debug, Clone, Default)]
pub struct GetUsageInput {
    /// Start of the window.
    pub from: Option<String>,
    /// End of the window.
    pub to: Option<String>,
    /// Bucket size: `minute`, `hour` or `day`.
    pub by: Option<String>,
    /// Region to report.
    pub region: Option<String>,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::get_regions`].
#[derive(Debug, Clone, Default)]
pub struct GetRegionsInput {
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Window the API actually reported on.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct StatsMeta {
    /// Start of the window, as an HTTP date.
    #[serde(default)]
    pub from: Option<String>,
    /// End of the window, as an HTTP date.
    #[serde(default)]
    pub to: Option<String>,
    /// Bucket size.
    #[serde(default)]
    pub by: Option<String>,
    /// Region the stats cover.
    #[serde(default)]
    pub region: Option<String>,
}

/// One time bucket of stats.
///
/// The common counters are typed; every other field the API sends is kept
/// in `extra`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Stats {
    /// The service the bucket belongs to.
    #[serde(default)]
    pub service_id: Option<String>,
    /// Unix timestamp of the bucket start.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Requests processed.
    #[serde(default)]
    pub requests: Option<u64>,
    /// Cache hits.
    #[serde(default)]
    pub hits: Option<u64>,
    /// Cache misses.
    #[serde(default)]
    pub miss: Option<u64>,
    /// Requests passed through to the backend.
    #[serde(default)]
    pub pass: Option<u64>,
    /// Synthetic responses.
    #[serde(default)]
    pub synth: Option<u64>,
    /// Requests that resulted in an error.
    #[serde(default)]
    pub errors: Option<u64>,
    /// Bytes delivered.
    #[serde(default)]
    pub bandwidth: Option<u64>,
    /// Response body bytes delivered.
    #[serde(default)]
    pub body_size: Option<u64>,
    /// Response header bytes delivered.
    #[serde(default)]
    pub header_size: Option<u64>,
    /// Request body bytes received.
    #[serde(default)]
    pub req_body_bytes: Option<u64>,
    /// Request header bytes received.
    #[serde(default)]
    pub req_header_bytes: Option<u64>,
    /// Ratio of hits to cacheable requests.
    #[serde(default)]
    pub hit_ratio: Option<f64>,
    /// Total time spent serving hits, in seconds.
    #[serde(default)]
    pub hits_time: Option<f64>,
    /// Total time spent serving misses, in seconds.
    #[serde(default)]
    pub miss_time: Option<f64>,
    /// Informational responses.
    #[serde(default)]
    pub status_1xx: Option<u64>,
    /// Successful responses.
    #[serde(default)]
    pub status_2xx: Option<u64>,
    /// Redirect responses.
    #[serde(default)]
    pub status_3xx: Option<u64>,
    /// Client error responses.
    #[serde(default)]
    pub status_4xx: Option<u64>,
    /// Server error responses.
    #[serde(default)]
    pub status_5xx: Option<u64>,
    /// `200 OK` responses.
    #[serde(default)]
    pub status_200: Option<u64>,
    /// `204 No Content` responses.
    #[serde(default)]
    pub status_204: Option<u64>,
    /// `301 Moved Permanently` responses.
    #[serde(default)]
    pub status_301: Option<u64>,
    /// `302 Found` responses.
    #[serde(default)]
    pub status_302: Option<u64>,
    /// `304 Not Modified` responses.
    #[serde(default)]
    pub status_304: Option<u64>,
    /// `400 Bad Request` responses.
    #[serde(default)]
    pub status_400: Option<u64>,
    /// `401 Unauthorized` responses.
    #[serde(default)]
    pub status_401: Option<u64>,
    /// `403 Forbidden` responses.
    #[serde(default)]
    pub status_403: Option<u64>,
    /// `404 Not Found` responses.
    #[serde(default)]
    pub status_404: Option<u64>,
    /// `500 Internal Server Error` responses.
    #[serde(default)]
    pub status_500: Option<u64>,
    /// `503 Service Unavailable` responses.
    #[serde(default)]
    pub status_503: Option<u64>,
    /// Any other field the API returned.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Response of [`FastlyClient::get_stats`].
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct StatsResponse {
    /// `"success"` when the query succeeded.
    #[serde(default)]
    pub status: Option<String>,
    /// The window the API reported on.
    #[serde(default)]
    pub meta: Option<StatsMeta>,
    /// Error or informational message.
    #[serde(default)]
    pub msg: Option<String>,
    /// One entry per time bucket.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub data: Vec<Stats>,
}

/// Response of [`FastlyClient::get_stats_field`], keyed by service ID.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct StatsFieldResponse {
    /// `"success"` when the query succeeded.
    #[serde(default)]
    pub status: Option<String>,
    /// The window the API reported on.
    #[serde(default)]
    pub meta: Option<StatsMeta>,
    /// Error or informational message.
    #[serde(default)]
    pub msg: Option<String>,
    /// Time buckets per service ID.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub data: HashMap<String, Vec<Stats>>,
}

/// Response of [`FastlyClient::get_regions`].
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RegionsResponse {
    /// `"success"` when the query succeeded.
    #[serde(default)]
    pub status: Option<String>,
    /// Region names, e.g. `usa`.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub data: Vec<String>,
    /// Error or informational message.
    #[serde(default)]
    pub msg: Option<String>,
    /// Response metadata as returned by the API.
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

/// Request and bandwidth totals.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct Usage {
    /// Requests processed.
    #[serde(default)]
    pub requests: Option<u64>,
    /// Bytes delivered.
    #[serde(default)]
    pub bandwidth: Option<u64>,
    /// Compute requests processed.
    #[serde(default)]
    pub compute_requests: Option<u64>,
}

/// Response of [`FastlyClient::get_usage`], keyed by region.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct UsageResponse {
    /// `"success"` when the query succeeded.
    #[serde(default)]
    pub status: Option<String>,
    /// The window the API reported on.
    #[serde(default)]
    pub meta: Option<StatsMeta>,
    /// Error or informational message.
    #[serde(default)]
    pub msg: Option<String>,
    /// Totals per region.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub data: HashMap<String, Usage>,
}

/// Response of [`FastlyClient::get_usage_by_service`], keyed by region then service ID.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct UsageByServiceResponse {
    /// `"success"` when the query succeeded.
    #[serde(default)]
    pub status: Option<String>,
    /// The window the API reported on.
    #[serde(default)]
    pub meta: Option<StatsMeta>,
    /// Error or informational message.
    #[serde(default)]
    pub msg: Option<String>,
    /// Totals per region, then per service ID.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub data: HashMap<String, HashMap<String, Usage>>,
}

fn stats_path(service: Option<&str>, field: Option<&str>) -> String {
    let service = service.filter(|s| !s.is_empty());
    let field = field.filter(|f| !f.is_empty());

    match (service, field) {
        (Some(service), Some(field)) => build_path(
            "stats/service/{service}/field/{field}",
            &[("service", service), ("field", field)],
        ),
        (Some(service), None) => build_path("stats/service/{service}", &[("service", service)]),
        (None, Some(field)) => build_path("stats/field/{field}", &[("field", field)]),
        (None, None) => "stats".to_string(),
    }
}

fn window_options(
    from: Option<&String>,
    to: Option<&String>,
    by: Option<&String>,
    region: Option<&String>,
    cancellation: Option<CancellationToken>,
) -> RequestOptions {
    let mut options = RequestOptions::default().cancellation(cancellation);

    for (key, value) in [("from", from), ("to", to), ("by", by), ("region", region)] {
        if let Some(value) = value {
            options = options.param(key, value.as_str());
        }
    }

    options
}

impl GetStatsInput {
    fn path(&self) -> String {
        stats_path(self.service.as_deref(), self.field.as_deref())
    }

    fn options(&self) -> RequestOptions {
        window_options(
            self.from.as_ref(),
            self.to.as_ref(),
            self.by.as_ref(),
            self.region.as_ref(),
            self.cancellation.clone(),
        )
    }
}

impl GetUsageInput {
    fn options(&self) -> RequestOptions {
        window_options(
            self.from.as_ref(),
            self.to.as_ref(),
            self.by.as_ref(),
            self.region.as_ref(),
            self.cancellation.clone(),
        )
    }
}

impl FastlyClient {
    /// Fetches historical stats.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn get_stats(&self, input: &GetStatsInput) -> Result<StatsResponse, ResourceError> {
        let response = self.get(&input.path(), input.options()).await?;
        decode(&response, "GetStats")
    }

    /// Fetches historical stats for a single field, grouped by service.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn get_stats_field(
        &self,
        input: &GetStatsInput,
    ) -> Result<StatsFieldResponse, ResourceError> {
        let response = self.get(&input.path(), input.options()).await?;
        decode(&response, "GetStatsField")
    }

    /// Fetches historical stats into a caller-chosen type.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// #[derive(serde::Deserialize)]
    /// struct Raw {
    ///     status: String,
    /// }
    ///
    /// let raw: Raw = client.get_stats_json(&input).await?;
    /// assert_eq!(raw.status, "success");
    /// ```
    pub async fn get_stats_json<T: DeserializeOwned>(
        &self,
        input: &GetStatsInput,
    ) -> Result<T, ResourceError> {
        let response = self.get(&input.path(), input.options()).await?;
        decode(&response, "GetStatsJSON")
    }

    /// Lists the regions stats can be reported for.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn get_regions(
        &self,
        input: &GetRegionsInput,
    ) -> Result<RegionsResponse, ResourceError> {
        let options = RequestOptions::default().cancellation(input.cancellation.clone());
        let response = self.get("stats/regions", options).await?;
        decode(&response, "GetRegions")
    }

    /// Fetches usage totals per region.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn get_usage(&self, input: &GetUsageInput) -> Result<UsageResponse, ResourceError> {
        let response = self.get("stats/usage", input.options()).await?;
        decode(&response, "GetUsage")
    }

    /// Fetches usage totals per region and service.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn get_usage_by_service(
        &self,
        input: &GetUsageInput,
    ) -> Result<UsageByServiceResponse, ResourceError> {
        let response = self.get("stats/usage_by_service", input.options()).await?;
        decode(&response, "GetUsageByService")
    }
}
