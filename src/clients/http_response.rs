//! HTTP response types for the Fastly API SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information parsed from Fastly's rate-limit headers.

use std::collections::HashMap;

/// Header carrying the number of mutating requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "fastly-ratelimit-remaining";

/// Header carrying the Unix timestamp at which the window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "fastly-ratelimit-reset";

/// Rate limit information parsed from `Fastly-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use fastly_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("998", Some("1700000000")).unwrap();
/// assert_eq!(limit.remaining, 998);
/// assert_eq!(limit.reset, Some(1_700_000_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp at which the window resets.
    pub reset: Option<i64>,
}

impl RateLimit {
    /// Parses the rate limit header values.
    ///
    /// Returns `None` if `remaining` is not a non-negative integer. An
    /// unparseable `reset` value is dropped.
    #[must_use]
    pub fn parse(remaining: &str, reset: Option<&str>) -> Option<Self> {
        let remaining = remaining.trim().parse().ok()?;
        let reset = reset.and_then(|r| r.trim().parse().ok());
        Some(Self { remaining, reset })
    }
}

/// An HTTP response from the Fastly API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Rate limit information, when the API sent it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let rate_limit = first(RATE_LIMIT_REMAINING_HEADER)
            .and_then(|remaining| RateLimit::parse(remaining, first(RATE_LIMIT_RESET_HEADER)));

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Extracts a readable error message from a failed response body.
    ///
    /// Fastly error bodies look like `{"msg": "...", "detail": "..."}`; newer
    /// endpoints use `title`/`detail` or a JSON:API `errors` array. Falls back
    /// to the raw body, or the status code when the body is empty.
    #[must_use]
    pub fn error_message(&self) -> String {
        let parsed: Option<serde_json::Value> = serde_json::from_str(&self.body).ok();

        if let Some(body) = parsed.as_ref().and_then(serde_json::Value::as_object) {
            let field = |key: &str| body.get(key).and_then(serde_json::Value::as_str);

            let headline = field("msg").or_else(|| field("title"));
            match (headline, field("detail")) {
                (Some(h), Some(d)) => return format!("{h}: {d}"),
                (Some(h), None) => return h.to_string(),
                (None, Some(d)) => return d.to_string(),
                (None, None) => {}
            }

            if let Some(errors) = body.get("errors").and_then(serde_json::Value::as_array) {
                let messages: Vec<String> = errors
                    .iter()
                    .filter_map(|e| {
                        e.get("detail")
                            .or_else(|| e.get("title"))
                            .and_then(serde_json::Value::as_str)
                            .map(ToString::to_string)
                    })
                    .collect();
                if !messages.is_empty() {
                    return messages.join("; ");
                }
            }
        }

        if self.body.trim().is_empty() {
            format!("status {}", self.code)
        } else {
            self.body.clone()
        }
    }
}
