//! Fastly API resource implementations.
//!
//! Each module maps one API resource to typed inputs, typed results and one
//! HTTP call per operation.
//!
//! ```text
//! resources/
//!   condition.rs      <- FastlyClient::{list,create,get,update,delete}_condition(s)
//!   vcl.rs            <- FastlyClient::*_vcl(s), get_generated_vcl, activate_vcl
//!   gzip.rs           <- FastlyClient::*_gzip(s)
//!   settings.rs       <- FastlyClient::{get,update}_settings
//!   purge.rs          <- FastlyClient::{purge, purge_key, purge_keys, purge_all}
//!   stats.rs          <- FastlyClient::get_stats*, get_regions, get_usage*
//!   domain_status.rs  <- domain_status::get
//!   access_keys.rs    <- access_keys::{list,get,create,delete}_access_key(s)
//! ```
//!
//! Service-scoped resources are methods on [`FastlyClient`](crate::FastlyClient);
//! the domain tools and object storage resources are free functions taking
//! the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::purge::PurgeKeyInput;
//! use fastly_api::rest::resources::domain_status::{self, GetInput};
//!
//! client
//!     .purge_key(&PurgeKeyInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         key: "product-42".to_string(),
//!         soft: true,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let status = domain_status::get(&client, &GetInput {
//!     domain: "example.com".to_string(),
//!     ..Default::default()
//! })
//! .await?;
//! ```

pub mod access_keys;
pub mod condition;
pub mod domain_status;
pub mod gzip;
pub mod purge;
pub mod settings;
pub mod stats;
pub mod vcl;

pub use condition::{Condition, ConditionType};
pub use gzip::Gzip;
pub use purge::Purge;
pub use settings::Settings;
pub use stats::{Stats, Usage};
pub use vcl::Vcl;
