//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Fastly API token.
///
/// The token is sent in the `Fastly-Key` header of every request, so its
/// value is masked in debug output to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use fastly_api::ApiKey;
///
/// let key = ApiKey::new("my-token").unwrap();
/// assert_eq!(key.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API endpoint, such as `https://api.fastly.com`.
///
/// The endpoint must use the `http` or `https` scheme and name a host.
/// Trailing slashes are removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use fastly_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://api.fastly.com/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://api.fastly.com");
/// assert_eq!(endpoint.host_name(), "api.fastly.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// The public Fastly API endpoint.
    pub const DEFAULT: &'static str = "https://api.fastly.com";

    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the endpoint.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host_start: "https://".len(),
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-token").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let endpoint = Endpoint::new("https://api.fastly.com///").unwrap();
        assert_eq!(endpoint.as_ref(), "https://api.fastly.com");
    }

    #[test]
    fn test_endpoint_accepts_local_mock_server() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(endpoint.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        assert!(Endpoint::new("api.fastly.com").is_err());
        assert!(Endpoint::new("ftp://api.fastly.com").is_err());
        assert!(Endpoint::new("https://").is_err());
        assert!(Endpoint::new("://api.fastly.com").is_err());
    }

    #[test]
    fn test_default_endpoint_is_public_api() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.as_ref(), "https://api.fastly.com");
        assert_eq!(endpoint.host_name(), "api.fastly.com");
        assert_eq!(endpoint, Endpoint::new(Endpoint::DEFAULT).unwrap());
    }
}
