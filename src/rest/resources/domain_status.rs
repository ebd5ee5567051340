//! Domain availability checks (`domains/v1/tools/status`).
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::domain_status::{self, GetInput, Scope};
//!
//! let status = domain_status::get(
//!     &client,
//!     &GetInput {
//!         domain: "example.org".to_string(),
//!         scope: Some(Scope::Estimate),
//!         ..Default::default()
//!     },
//! )
//! .await?;
//!
//! for offer in &status.offers {
//!     println!("{:?} {:?} at {:?}", offer.price, offer.currency, offer.vendor);
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{decode, lenient, ResourceError};

const STATUS_PATH: &str = "domains/v1/tools/status";

/// How deep the availability check goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// DNS and aftermarket level check; returns offers where available.
    Estimate,
}

impl Scope {
    /// Returns the wire value of the scope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Estimate => "estimate",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An offer to buy a domain.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Offer {
    /// The registrar or marketplace making the offer.
    #[serde(default)]
    pub vendor: Option<String>,
    /// ISO 4217 currency code, e.g. `USD`.
    #[serde(default)]
    pub currency: Option<String>,
    /// The asking price.
    #[serde(default, deserialize_with = "lenient::option_string")]
    pub price: Option<String>,
}

/// Availability status of a domain.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Status {
    /// The domain that was checked.
    #[serde(default)]
    pub domain: Option<String>,
    /// The zone (TLD) of the domain, e.g. `com`.
    #[serde(default)]
    pub zone: Option<String>,
    /// Space-separated status values, e.g. `undelegated inactive`.
    #[serde(default)]
    pub status: Option<String>,
    /// Space-separated tags describing the zone, e.g. `generic`.
    #[serde(default)]
    pub tags: Option<String>,
    /// The scope of the check as reported by the API, e.g. `estimate`.
    #[serde(default)]
    pub scope: Option<String>,
    /// Purchase offers, if any.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub offers: Vec<Offer>,
}

/// Input for [`get`].
#[derive(Debug, Clone, Default)]
pub struct GetInput {
    /// The domain to check (required).
    pub domain: String,
    /// The check to perform. Defaults to a precise status check.
    pub scope: Option<Scope>,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Checks the availability of a domain.
///
/// # Errors
///
/// Returns [`ResourceError::MissingDomain`] before sending, or any transport
/// or decode error.
pub async fn get(client: &FastlyClient, input: &GetInput) -> Result<Status, ResourceError> {
    if input.domain.is_empty() {
        return Err(ResourceError::MissingDomain);
    }

    let mut options = RequestOptions::default()
        .param("domain", input.domain.as_str())
        .cancellation(input.cancellation.clone());

    if let Some(scope) = input.scope {
        options = options.param("scope", scope.as_str());
    }

    let response = client.get(STATUS_PATH, options).await?;
    decode(&response, "GetDomainStatus")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_scope() {
        let status: Status = serde_json::from_str(
            r#"{"domain":"example.com","zone":"com","status":"undelegated inactive","tags":"generic"}"#,
        )
        .unwrap();

        assert_eq!(status.zone.as_deref(), Some("com"));
        assert!(status.status.unwrap().contains("inactive"));
        assert!(status.scope.is_none());
        assert!(status.offers.is_empty());
    }

    #[test]
    fn test_status_with_estimate_offers() {
        let status: Status = serde_json::from_str(
            r#"{
                "domain": "example.org",
                "zone": "org",
                "status": "marketed priced transferable active",
                "scope": "estimate",
                "tags": "generic",
                "offers": [{"vendor": "Dan.com", "currency": "USD", "price": "5000.00"}]
            }"#,
        )
        .unwrap();

        assert_eq!(status.scope.as_deref(), Some("estimate"));
        assert_eq!(status.offers.len(), 1);
        assert_eq!(status.offers[0].currency.as_deref(), Some("USD"));
        assert_eq!(status.offers[0].price.as_deref(), Some("5000.00"));
    }

    #[test]
    fn test_status_tolerates_nulls_and_unknown_scope() {
        let status: Status = serde_json::from_str(
            r#"{
                "domain": "x.com",
                "zone": null,
                "status": "undelegated inactive",
                "tags": null,
                "scope": "precise",
                "offers": null
            }"#,
        )
        .unwrap();

        assert_eq!(status.domain.as_deref(), Some("x.com"));
        assert!(status.zone.is_none());
        assert!(status.tags.is_none());
        assert_eq!(status.scope.as_deref(), Some("precise"));
        assert!(status.offers.is_empty());
    }

    #[test]
    fn test_offer_with_null_fields() {
        let offer: Offer =
            serde_json::from_str(r#"{"vendor": null, "currency": null, "price": null}"#).unwrap();

        assert_eq!(offer, Offer::default());
    }

    #[test]
    fn test_scope_wire_value() {
        assert_eq!(Scope::Estimate.to_string(), "estimate");
    }
}
