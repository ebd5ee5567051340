//! HTTP client types for Fastly API communication.
//!
//! This module provides the HTTP layer every resource operation sends its
//! request through.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`RateLimit`]: Parsed `Fastly-RateLimit-*` headers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::FastlyClient`]: Higher-level client used by the resource modules
//!
//! # Concurrency
//!
//! Mutating requests are sent one at a time per client unless marked
//! `parallel`. GET requests never wait.
//!
//! There are no automatic retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    HttpResponse, RateLimit, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
};

pub use rest::{FastlyClient, RequestOptions};
