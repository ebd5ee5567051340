//! HTTP client for Fastly API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Fastly API.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, RateLimit};
use crate::config::FastlyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API token.
pub const API_KEY_HEADER: &str = "Fastly-Key";

/// HTTP client for making requests to the Fastly API.
///
/// The client handles:
/// - URL construction from the configured endpoint
/// - Default headers including `Fastly-Key` and `User-Agent`
/// - Serializing mutating requests unless they are marked parallel
/// - Cancellation through a request's `CancellationToken`
/// - Tracking `Fastly-RateLimit-*` headers
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fastly_api::{ApiKey, FastlyConfig};
/// use fastly_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = FastlyConfig::builder()
///     .api_key(ApiKey::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "stats/regions").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.fastly.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Held for the duration of every non-parallel mutating request.
    write_lock: tokio::sync::Mutex<()>,
    /// Most recent rate limit seen on a mutating request.
    rate_limit: Mutex<Option<RateLimit>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &FastlyConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}fastly-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.endpoint().as_ref().to_string(),
            default_headers,
            write_lock: tokio::sync::Mutex::new(()),
            rate_limit: Mutex::new(None),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the most recent rate limit observed on a mutating request.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sends an HTTP request to the Fastly API.
    ///
    /// Mutating requests (anything but GET) wait for each other unless the
    /// request is marked `parallel`. If the request carries a cancellation
    /// token, cancelling it aborts the request, including any wait for the
    /// write lock.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - The cancellation token fires first (`Cancelled`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        match request.cancellation.clone() {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        tracing::debug!(path = %request.path, "Request cancelled");
                        Err(HttpError::Cancelled)
                    }
                    result = self.dispatch(&request) => result,
                }
            }
            None => self.dispatch(&request).await,
        }
    }

    async fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let mutating = request.http_method.is_mutating();

        let _guard = if mutating && !request.parallel {
            Some(self.write_lock.lock().await)
        } else {
            None
        };

        let url = format!("{}/{}", self.base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            parallel = request.parallel,
            "Sending request to Fastly API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(path = %request.path, status = code, "Received response");

        if mutating {
            if let Some(limit) = response.rate_limit {
                tracing::debug!(
                    remaining = limit.remaining,
                    reset = ?limit.reset,
                    "Rate limit updated"
                );
                *self
                    .rate_limit
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Some(limit);
            }
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.error_message(),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, Endpoint};

    fn create_test_config() -> FastlyConfig {
        FastlyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = FastlyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .endpoint(Endpoint::new("http://localhost:8080/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_uri(), "http://localhost:8080");
    }

    #[test]
    fn test_client_defaults_to_public_api() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_uri(), "https://api.fastly.com");
    }

    #[test]
    fn test_api_key_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Fastly-Key"),
            Some(&"test-api-key".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("fastly-api-rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = FastlyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_rate_limit_starts_empty() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert!(client.rate_limit().is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
