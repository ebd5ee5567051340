//! Service version settings.
//!
//! Settings hold the version-wide defaults: the default host, the default
//! TTL and stale-if-error behavior. The API uses dotted `general.*` keys.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{
    decode, lenient, require_service_version, to_form_body, versioned_path, ResourceError,
};

const SETTINGS: &str = "settings";

/// Settings of a service version.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// The default host name for the version.
    #[serde(rename = "general.default_host", default)]
    pub default_host: Option<String>,

    /// The default time-to-live in seconds.
    #[serde(
        rename = "general.default_ttl",
        default,
        deserialize_with = "lenient::option_number"
    )]
    pub default_ttl: Option<u32>,

    /// The service this belongs to.
    #[serde(default)]
    pub service_id: Option<String>,

    /// The service version this belongs to.
    #[serde(
        rename = "version",
        default,
        deserialize_with = "lenient::option_number"
    )]
    pub service_version: Option<u32>,

    /// Whether stale objects are served when the backend errors.
    #[serde(
        rename = "general.stale_if_error",
        default,
        deserialize_with = "lenient::option_bool"
    )]
    pub stale_if_error: Option<bool>,

    /// How long stale objects may be served, in seconds.
    #[serde(
        rename = "general.stale_if_error_ttl",
        default,
        deserialize_with = "lenient::option_number"
    )]
    pub stale_if_error_ttl: Option<u32>,
}

/// Input for [`FastlyClient::get_settings`].
#[derive(Debug, Clone, Default)]
pub struct GetSettingsInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::update_settings`].
///
/// Unset fields are left out of the request and keep their current value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSettingsInput {
    /// The ID of the service (required).
    #[serde(skip)]
    pub service_id: String,
    /// The service version (required).
    #[serde(skip)]
    pub service_version: u32,
    /// The default host name for the version.
    #[serde(rename = "general.default_host", skip_serializing_if = "Option::is_none")]
    pub default_host: Option<String>,
    /// Default time to live, in seconds.
    #[serde(rename = "general.default_ttl", skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<u32>,
    /// Serves stale content when the origin errors.
    #[serde(
        rename = "general.stale_if_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub stale_if_error: Option<bool>,
    /// How long stale content may be served, in seconds.
    #[serde(
        rename = "general.stale_if_error_ttl",
        skip_serializing_if = "Option::is_none"
    )]
    pub stale_if_error_ttl: Option<u32>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

impl FastlyClient {
    /// Fetches the settings of a service version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingServiceId`] or
    /// [`ResourceError::MissingServiceVersion`] before sending, or any
    /// transport or decode error.
    pub async fn get_settings(&self, input: &GetSettingsInput) -> Result<Settings, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, SETTINGS, None);
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "GetSettings")
    }

    /// Updates the settings of a service version.
    ///
    /// # Errors
    ///
    /// Same as [`get_settings`](Self::get_settings).
    pub async fn update_settings(
        &self,
        input: &UpdateSettingsInput,
    ) -> Result<Settings, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, SETTINGS, None);
        let form = to_form_body(input, "UpdateSettings")?;
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.put_form(&path, form, options).await?;
        decode(&response, "UpdateSettings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_deserializes_dotted_keys() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "general.default_host": "example.com",
                "general.default_ttl": 3600,
                "general.stale_if_error": false,
                "general.stale_if_error_ttl": "43200",
                "service_id": "SU1Z0isxPaozGVKXdv0eY",
                "version": 5
            }"#,
        )
        .unwrap();

        assert_eq!(settings.default_host.as_deref(), Some("example.com"));
        assert_eq!(settings.default_ttl, Some(3600));
        assert_eq!(settings.stale_if_error, Some(false));
        assert_eq!(settings.stale_if_error_ttl, Some(43200));
        assert_eq!(settings.service_version, Some(5));
    }

    #[test]
    fn test_update_form_sends_zero_ttl_and_omits_unset() {
        let input = UpdateSettingsInput {
            service_id: "abc".to_string(),
            service_version: 5,
            default_ttl: Some(0),
            ..Default::default()
        };

        assert_eq!(
            to_form_body(&input, "UpdateSettings").unwrap(),
            "general.default_ttl=0"
        );
    }
}
