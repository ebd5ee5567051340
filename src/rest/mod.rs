//! Resource infrastructure for the Fastly API.
//!
//! This module provides the building blocks every resource operation uses:
//!
//! - **[`ResourceError`]**: Validation, transport, and decoding errors
//! - **Path building**: [`build_path`] and [`versioned_path`] with per-segment escaping
//! - **Form encoding**: [`to_form_body`] for create and update bodies
//! - **Decoding**: [`decode`] and [`ensure_status_ok`]
//! - **Validation**: [`require_service_version`] and [`require_named`]
//!
//! Individual resources (conditions, VCL, purge, ...) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::{ApiKey, FastlyClient, FastlyConfig};
//! use fastly_api::rest::resources::condition::{CreateConditionInput, ListConditionsInput};
//!
//! let config = FastlyConfig::builder()
//!     .api_key(ApiKey::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = FastlyClient::new(&config)?;
//!
//! let conditions = client
//!     .list_conditions(&ListConditionsInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         service_version: 1,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for condition in &conditions {
//!     println!("{:?}: {:?}", condition.name, condition.statement);
//! }
//! ```

mod errors;
mod form;
pub mod lenient;
mod path;
mod resource;

pub mod resources;

pub use errors::ResourceError;
pub use form::to_form_body;
pub use path::{build_path, versioned_path, VERSIONED};
pub use resource::{
    decode, ensure_status_ok, require_named, require_service_version, StatusResponse,
};
