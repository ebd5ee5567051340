//! Custom VCL resource implementation.
//!
//! Custom VCL files uploaded to a service version. Exactly one of them may
//! be marked `main`; [`FastlyClient::activate_vcl`] switches which one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{
    decode, ensure_status_ok, lenient, require_named, require_service_version, to_form_body,
    versioned_path, ResourceError,
};

/// A custom VCL file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Vcl {
    /// The VCL source.
    #[serde(default)]
    pub content: Option<String>,
    /// When it was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When it was deleted, if it was.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Whether this is the main VCL of the version.
    #[serde(default, deserialize_with = "lenient::option_bool")]
    pub main: Option<bool>,
    /// Name of the VCL.
    #[serde(default)]
    pub name: Option<String>,
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
    /// When it was last changed.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for [`FastlyClient::list_vcls`].
#[derive(Debug, Clone, Default)]
pub struct ListVclsInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::get_vcl`].
#[derive(Debug, Clone, Default)]
pub struct GetVclInput {
    /// The name of the VCL (required).
    pub name: String,
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::get_generated_vcl`].
#[derive(Debug, Clone, Default)]
pub struct GetGeneratedVclInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::create_vcl`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVclInput {
    /// The ID of the service (required).
    #[serde(skip)]
    pub service_id: String,
    /// The service version (required).
    #[serde(skip)]
    pub service_version: u32,
    /// The VCL source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Marks the new VCL as the main one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<bool>,
    /// Name of the new VCL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::update_vcl`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateVclInput {
    /// The current name of the VCL (required).
    #[serde(skip)]
    pub name: String,
    /// The ID of the service (required).
    #[serde(skip)]
    pub service_id: String,
    /// The service version (required).
    #[serde(skip)]
    pub service_version: u32,
    /// Replaces the VCL source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Renames the VCL.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::activate_vcl`].
#[derive(Debug, Clone, Default)]
pub struct ActivateVclInput {
    /// The name of the VCL (required).
    pub name: String,
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::delete_vcl`].
#[derive(Debug, Clone, Default)]
pub struct DeleteVclInput {
    /// The name of the VCL (required).
    pub name: String,
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

impl FastlyClient {
    /// Lists the custom VCL files of a service version.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn list_vcls(&self, input: &ListVclsInput) -> Result<Vec<Vcl>, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, "vcl", None);
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "ListVCLs")
    }

    /// Fetches a custom VCL file by name.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn get_vcl(&self, input: &GetVclInput) -> Result<Vcl, ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            "vcl/{name}",
            Some(&input.name),
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "GetVCL")
    }

    /// Fetches the VCL Fastly generated for a service version.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn get_generated_vcl(
        &self,
        input: &GetGeneratedVclInput,
    ) -> Result<Vcl, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            "generated_vcl",
            None,
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "GetGeneratedVCL")
    }

    /// Uploads a custom VCL file.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn create_vcl(&self, input: &CreateVclInput) -> Result<Vcl, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, "vcl", None);
        let form = to_form_body(input, "CreateVCL")?;
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.post_form(&path, form, options).await?;
        decode(&response, "CreateVCL")
    }

    /// Updates the content or name of a custom VCL file.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn update_vcl(&self, input: &UpdateVclInput) -> Result<Vcl, ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            "vcl/{name}",
            Some(&input.name),
        );
        let form = to_form_body(input, "UpdateVCL")?;
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.put_form(&path, form, options).await?;
        decode(&response, "UpdateVCL")
    }

    /// Marks a custom VCL file as the main one.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, or any transport or decode error.
    pub async fn activate_vcl(&self, input: &ActivateVclInput) -> Result<Vcl, ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            "vcl/{name}/main",
            Some(&input.name),
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.put(&path, options).await?;
        decode(&response, "ActivateVCL")
    }

    /// Deletes a custom VCL file.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before sending, [`ResourceError::NotOk`] if
    /// the deletion is not confirmed, or any transport or decode error.
    pub async fn delete_vcl(&self, input: &DeleteVclInput) -> Result<(), ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            "vcl/{name}",
            Some(&input.name),
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.delete(&path, options).await?;
        ensure_status_ok(&response, "DeleteVCL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vcl_deserializes_main_flag_forms() {
        let vcl: Vcl = serde_json::from_str(
            r#"{"name":"main","main":true,"content":"sub vcl_recv {}","version":"3"}"#,
        )
        .unwrap();
        assert_eq!(vcl.main, Some(true));
        assert_eq!(vcl.service_version, Some(3));

        let vcl: Vcl = serde_json::from_str(r#"{"name":"other","main":"0"}"#).unwrap();
        assert_eq!(vcl.main, Some(false));
    }

    #[test]
    fn test_update_sends_new_name_as_name() {
        let input = UpdateVclInput {
            name: "old".to_string(),
            service_id: "abc".to_string(),
            service_version: 1,
            new_name: Some("new".to_string()),
            ..Default::default()
        };

        assert_eq!(to_form_body(&input, "UpdateVCL").unwrap(), "name=new");
    }

    #[test]
    fn test_create_sends_main_false() {
        let input = CreateVclInput {
            service_id: "abc".to_string(),
            service_version: 1,
            main: Some(false),
            ..Default::default()
        };

        assert_eq!(to_form_body(&input, "CreateVCL").unwrap(), "main=false");
    }
}
