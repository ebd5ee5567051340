//! # Fastly API Rust SDK
//!
//! A Rust SDK for the Fastly control-plane API, providing type-safe
//! configuration, an async HTTP client and typed operations for service
//! configuration, purging, stats and account tools.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`FastlyConfig`] and [`FastlyConfigBuilder`]
//! - An async client ([`FastlyClient`]) that authenticates every request with
//!   the `Fastly-Key` header and serializes mutating requests unless they opt
//!   into parallel execution
//! - Versioned service resources: conditions, VCLs, gzip rules and settings
//! - Purging by URL, surrogate key, batch of keys, or whole service
//! - Historical stats, regions and usage
//! - Domain availability checks and object storage access keys
//!
//! ## Quick Start
//!
//! ```rust
//! use fastly_api::{ApiKey, FastlyClient, FastlyConfig};
//!
//! let config = FastlyConfig::builder()
//!     .api_key(ApiKey::new("my-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = FastlyClient::new(&config).unwrap();
//! assert_eq!(client.base_uri(), "https://api.fastly.com");
//! ```
//!
//! Configuration can also be read from `FASTLY_API_KEY` and `FASTLY_API_URL`
//! with [`FastlyConfig::from_env`].
//!
//! ## Service Configuration
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::condition::{CreateConditionInput, ConditionType};
//!
//! let condition = client
//!     .create_condition(&CreateConditionInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         service_version: 3,
//!         name: Some("is-api".to_string()),
//!         statement: Some("req.url ~ \"^/api/\"".to_string()),
//!         condition_type: Some(ConditionType::Request),
//!         priority: Some(10),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Purging
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::purge::PurgeInput;
//!
//! let purge = client
//!     .purge(&PurgeInput {
//!         url: "www.example.com/images/logo.png".to_string(),
//!         soft: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("purge id: {:?}", purge.id);
//! ```
//!
//! ## Errors
//!
//! Resource operations return [`ResourceError`]. Missing required inputs are
//! reported before any request is sent; API failures carry the HTTP status and
//! the message extracted from the response body.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction and operations
//!   validate required inputs before sending
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, Endpoint, FastlyConfig, FastlyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, FastlyClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RateLimit, RequestOptions,
};

// Re-export resource error type
pub use rest::ResourceError;
