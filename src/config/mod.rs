//! Configuration types for the Fastly API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Fastly.
//!
//! # Overview
//!
//! - [`FastlyConfig`]: The main configuration struct holding all SDK settings
//! - [`FastlyConfigBuilder`]: A builder for constructing [`FastlyConfig`] instances
//! - [`ApiKey`]: A validated API token newtype with masked debug output
//! - [`Endpoint`]: A validated API endpoint URL
//!
//! # Example
//!
//! ```rust
//! use fastly_api::{FastlyConfig, ApiKey, Endpoint};
//!
//! let config = FastlyConfig::builder()
//!     .api_key(ApiKey::new("my-api-token").unwrap())
//!     .endpoint(Endpoint::new("https://api.fastly.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, Endpoint};

use crate::error::ConfigError;

/// Environment variable holding the API token.
pub const API_KEY_ENV_VAR: &str = "FASTLY_API_KEY";

/// Environment variable overriding the API endpoint.
pub const ENDPOINT_ENV_VAR: &str = "FASTLY_API_URL";

/// Configuration for the Fastly API SDK.
///
/// # Thread Safety
///
/// `FastlyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use fastly_api::{FastlyConfig, ApiKey};
///
/// let config = FastlyConfig::builder()
///     .api_key(ApiKey::new("token").unwrap())
///     .user_agent_prefix("deploy-bot/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "https://api.fastly.com");
/// ```
#[derive(Clone, Debug)]
pub struct FastlyConfig {
    api_key: ApiKey,
    endpoint: Endpoint,
    user_agent_prefix: Option<String>,
}

impl FastlyConfig {
    /// Creates a new builder for constructing a `FastlyConfig`.
    #[must_use]
    pub fn builder() -> FastlyConfigBuilder {
        FastlyConfigBuilder::new()
    }

    /// Builds a configuration from `FASTLY_API_KEY` and, if set, `FASTLY_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `FASTLY_API_KEY` is unset,
    /// or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV_VAR).map_err(|_| ConfigError::MissingEnvVar {
            name: API_KEY_ENV_VAR,
        })?;

        let mut builder = Self::builder().api_key(ApiKey::new(api_key)?);

        if let Ok(url) = std::env::var(ENDPOINT_ENV_VAR) {
            if !url.trim().is_empty() {
                builder = builder.endpoint(Endpoint::new(url)?);
            }
        }

        builder.build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify FastlyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FastlyConfig>();
};

/// Builder for constructing [`FastlyConfig`] instances.
///
/// `api_key` is required. `endpoint` defaults to [`Endpoint::DEFAULT`].
#[derive(Debug, Default)]
pub struct FastlyConfigBuilder {
    api_key: Option<ApiKey>,
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
}

impl FastlyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`FastlyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<FastlyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(FastlyConfig {
            api_key,
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
