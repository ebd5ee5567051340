//! Condition resource implementation.
//!
//! Conditions are VCL expressions attached to a service version that control
//! when request, cache, response or prefetch settings apply.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::condition::{ConditionType, CreateConditionInput};
//!
//! let condition = client
//!     .create_condition(&CreateConditionInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         service_version: 2,
//!         name: Some("is_api".to_string()),
//!         statement: Some("req.url ~ \"^/api/\"".to_string()),
//!         condition_type: Some(ConditionType::Request),
//!         priority: Some(10),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::clients::{FastlyClient, RequestOptions};
use crate::rest::{
    decode, ensure_status_ok, lenient, require_named, require_service_version, to_form_body,
    versioned_path, ResourceError,
};

const COLLECTION: &str = "condition";
const NAMED: &str = "condition/{name}";

/// The phase of request processing a condition applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionType {
    /// Evaluated on the incoming request.
    Request,
    /// Evaluated before an object is cached.
    Cache,
    /// Evaluated on the outgoing response.
    Response,
    /// Evaluated before the request goes to the backend.
    Prefetch,
    /// A type this client does not know. Decoding only; sending it fails.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// A condition on a service version.
///
/// Every field is optional since the API may omit any of them.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Condition {
    /// A freeform descriptive note.
    #[serde(default)]
    pub comment: Option<String>,

    /// When the condition was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the condition was deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,

    /// The name of the condition.
    #[serde(default)]
    pub name: Option<String>,

    /// Evaluation order; lower runs first. The API may send it as a string.
    #[serde(default, deserialize_with = "lenient::option_number")]
    pub priority: Option<i64>,

    /// The service the condition belongs to.
    #[serde(default)]
    pub service_id: Option<String>,

    /// The service version the condition belongs to.
    #[serde(
        rename = "version",
        default,
        deserialize_with = "lenient::option_number"
    )]
    pub service_version: Option<u32>,

    /// The VCL expression.
    #[serde(default)]
    pub statement: Option<String>,

    /// The condition type.
    #[serde(rename = "type", default)]
    pub condition_type: Option<ConditionType>,

    /// When the condition was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for [`FastlyClient::list_conditions`].
#[derive(Debug, Clone, Default)]
pub struct ListConditionsInput {
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::create_condition`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateConditionInput {
    /// The ID of the service (required).
    #[serde(skip)]
    pub service_id: String,
    /// The service version (required).
    #[serde(skip)]
    pub service_version: u32,
    /// The name of the condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Evaluation order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// The VCL expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    /// The condition type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<ConditionType>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::get_condition`].
#[derive(Debug, Clone, Default)]
pub struct GetConditionInput {
    /// The name of the condition (required).
    pub name: String,
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::update_condition`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateConditionInput {
    /// The name of the condition to update (required).
    #[serde(skip)]
    pub name: String,
    /// The ID of the service (required).
    #[serde(skip)]
    pub service_id: String,
    /// The service version (required).
    #[serde(skip)]
    pub service_version: u32,
    /// A freeform descriptive note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Evaluation order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// The VCL expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    /// The condition type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<ConditionType>,
    /// Aborts the request when cancelled.
    #[serde(skip)]
    pub cancellation: Option<CancellationToken>,
}

/// Input for [`FastlyClient::delete_condition`].
#[derive(Debug, Clone, Default)]
pub struct DeleteConditionInput {
    /// The name of the condition to delete (required).
    pub name: String,
    /// The ID of the service (required).
    pub service_id: String,
    /// The service version (required).
    pub service_version: u32,
    /// Aborts the request when cancelled.
    pub cancellation: Option<CancellationToken>,
}

impl FastlyClient {
    /// Lists all conditions on a service version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingServiceId`] or
    /// [`ResourceError::MissingServiceVersion`] before sending, or any
    /// transport or decode error.
    pub async fn list_conditions(
        &self,
        input: &ListConditionsInput,
    ) -> Result<Vec<Condition>, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, COLLECTION, None);
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "ListConditions")
    }

    /// Creates a condition on a service version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingServiceId`] or
    /// [`ResourceError::MissingServiceVersion`] before sending, or any
    /// transport or decode error.
    pub async fn create_condition(
        &self,
        input: &CreateConditionInput,
    ) -> Result<Condition, ResourceError> {
        require_service_version(&input.service_id, input.service_version)?;

        let path = versioned_path(&input.service_id, input.service_version, COLLECTION, None);
        let form = to_form_body(input, "CreateCondition")?;
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.post_form(&path, form, options).await?;
        decode(&response, "CreateCondition")
    }

    /// Fetches a single condition by name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingName`],
    /// [`ResourceError::MissingServiceId`] or
    /// [`ResourceError::MissingServiceVersion`] before sending, or any
    /// transport or decode error.
    pub async fn get_condition(
        &self,
        input: &GetConditionInput,
    ) -> Result<Condition, ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            NAMED,
            Some(&input.name),
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.get(&path, options).await?;
        decode(&response, "GetCondition")
    }

    /// Updates a condition. Only the fields that are set are sent.
    ///
    /// # Errors
    ///
    /// Same as [`get_condition`](Self::get_condition).
    pub async fn update_condition(
        &self,
        input: &UpdateConditionInput,
    ) -> Result<Condition, ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            NAMED,
            Some(&input.name),
        );
        let form = to_form_body(input, "UpdateCondition")?;
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.put_form(&path, form, options).await?;
        decode(&response, "UpdateCondition")
    }

    /// Deletes a condition.
    ///
    /// # Errors
    ///
    /// Same as [`get_condition`](Self::get_condition), plus
    /// [`ResourceError::NotOk`] when the API does not confirm the deletion.
    pub async fn delete_condition(&self, input: &DeleteConditionInput) -> Result<(), ResourceError> {
        require_named(&input.name, &input.service_id, input.service_version)?;

        let path = versioned_path(
            &input.service_id,
            input.service_version,
            NAMED,
            Some(&input.name),
        );
        let options = RequestOptions::default().cancellation(input.cancellation.clone());

        let response = self.delete(&path, options).await?;
        ensure_status_ok(&response, "DeleteCondition")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_deserializes_string_priority() {
        let json = r#"{
            "comment": "",
            "name": "is_api",
            "priority": "10",
            "service_id": "SU1Z0isxPaozGVKXdv0eY",
            "version": 2,
            "statement": "req.url ~ \"^/api/\"",
            "type": "REQUEST",
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-16T08:00:00Z",
            "deleted_at": null
        }"#;

        let condition: Condition = serde_json::from_str(json).unwrap();

        assert_eq!(condition.name.as_deref(), Some("is_api"));
        assert_eq!(condition.priority, Some(10));
        assert_eq!(condition.service_version, Some(2));
        assert_eq!(condition.condition_type, Some(ConditionType::Request));
        assert_eq!(condition.comment.as_deref(), Some(""));
        assert!(condition.created_at.is_some());
        assert!(condition.deleted_at.is_none());
    }

    #[test]
    fn test_create_input_form_omits_unset_fields() {
        let input = CreateConditionInput {
            service_id: "abc".to_string(),
            service_version: 1,
            name: Some("foo".to_string()),
            priority: Some(0),
            ..Default::default()
        };

        let form = to_form_body(&input, "CreateCondition").unwrap();

        assert_eq!(form, "name=foo&priority=0");
    }

    #[test]
    fn test_update_input_form_sends_type_uppercase() {
        let input = UpdateConditionInput {
            name: "foo".to_string(),
            service_id: "abc".to_string(),
            service_version: 1,
            condition_type: Some(ConditionType::Cache),
            comment: Some(String::new()),
            ..Default::default()
        };

        let form = to_form_body(&input, "UpdateCondition").unwrap();

        assert_eq!(form, "comment=&type=CACHE");
    }

    #[test]
    fn test_condition_with_unknown_type_and_nulls() {
        let json = r#"{"name": "edge", "type": "EDGE", "priority": null, "statement": null}"#;

        let condition: Condition = serde_json::from_str(json).unwrap();

        assert_eq!(condition.condition_type, Some(ConditionType::Unknown));
        assert!(condition.priority.is_none());
        assert!(condition.statement.is_none());
    }

    #[test]
    fn test_unknown_type_is_not_sent() {
        let input = CreateConditionInput {
            service_id: "abc".to_string(),
            service_version: 1,
            condition_type: Some(ConditionType::Unknown),
            ..Default::default()
        };

        let result = to_form_body(&input, "CreateCondition");

        assert!(matches!(
            result,
            Err(ResourceError::Encode {
                operation: "CreateCondition",
                ..
            })
        ));
    }
}
