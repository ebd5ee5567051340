//! REST client implementation for the Fastly API.
//!
//! This module provides the [`FastlyClient`] type, the entry point every
//! resource operation goes through, and [`RequestOptions`] for per-call
//! headers, query parameters, cancellation and the parallel hint.

use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::clients::RateLimit;
use crate::config::FastlyConfig;

/// Per-request options accepted by every [`FastlyClient`] method.
///
/// # Example
///
/// ```rust
/// use fastly_api::RequestOptions;
///
/// let options = RequestOptions::default()
///     .header("Fastly-Soft-Purge", "1")
///     .param("domain", "example.com")
///     .parallel(true);
///
/// assert!(options.parallel);
/// assert_eq!(options.params, vec![("domain".to_string(), "example.com".to_string())]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Extra request headers.
    pub headers: HashMap<String, String>,
    /// Query parameters, sent in order.
    pub params: Vec<(String, String)>,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
    /// Lets a mutating request run without waiting for other mutating requests.
    pub parallel: bool,
}

impl RequestOptions {
    /// Adds a request header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the cancellation token.
    #[must_use]
    pub fn cancellation(mut self, token: Option<CancellationToken>) -> Self {
        self.cancellation = token;
        self
    }

    /// Sets the parallel hint.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Client for the Fastly control-plane API.
///
/// Provides `get`, `post`, `put`, `delete` and body-carrying variants with
/// path normalization. Resource operations in [`crate::rest::resources`] are
/// built on top of these methods.
///
/// # Thread Safety
///
/// `FastlyClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fastly_api::{ApiKey, FastlyClient, FastlyConfig, RequestOptions};
///
/// let config = FastlyConfig::builder()
///     .api_key(ApiKey::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = FastlyClient::new(&config)?;
/// let response = client.get("stats/regions", RequestOptions::default()).await?;
/// println!("Regions: {}", response.body);
/// ```
#[derive(Debug)]
pub struct FastlyClient {
    http_client: HttpClient,
}

// Verify FastlyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FastlyClient>();
};

impl FastlyClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP transport cannot be created.
    pub fn new(config: &FastlyConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Returns the most recent rate limit observed on a mutating request.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.http_client.rate_limit()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the path is empty after
    /// normalization, and any other [`HttpError`] the transport reports.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let options = RequestOptions::default().param("domain", "example.com");
    /// let response = client.get("domains/v1/tools/status", options).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, options).await
    }

    /// Sends a POST request without a body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, None, options).await
    }

    /// Sends a PUT request without a body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn put(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, None, options).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, options)
            .await
    }

    /// Sends a POST request with an already-encoded form body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client
    ///     .post_form("service/abc/version/1/condition", "name=foo&priority=10", RequestOptions::default())
    ///     .await?;
    /// ```
    pub async fn post_form(
        &self,
        path: &str,
        form: impl Into<String>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(
            HttpMethod::Post,
            path,
            Some((form.into(), DataType::Form)),
            options,
        )
        .await
    }

    /// Sends a PUT request with an already-encoded form body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn put_form(
        &self,
        path: &str,
        form: impl Into<String>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(
            HttpMethod::Put,
            path,
            Some((form.into(), DataType::Form)),
            options,
        )
        .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(
            HttpMethod::Post,
            path,
            Some((body.to_string(), DataType::Json)),
            options,
        )
        .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<(String, DataType)>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path)
            .parallel(options.parallel)
            .cancellation(options.cancellation);

        if let Some((body, body_type)) = body {
            builder = builder.body(body).body_type(body_type);
        }

        if !options.params.is_empty() {
            builder = builder.query(options.params);
        }

        if !options.headers.is_empty() {
            builder = builder.extra_headers(options.headers);
        }

        let request = builder.build()?;

        self.http_client.request(request).await
    }
}

/// Strips leading `/` characters, rejecting paths left empty.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(InvalidHttpRequestError::EmptyPath);
    }

    Ok(path.to_string())
}
