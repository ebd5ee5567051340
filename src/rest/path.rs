//! Path building for Fastly API resources.
//!
//! Resource paths are written as templates with `{name}` placeholders:
//!
//! - `service/{service_id}/version/{service_version}/condition`
//! - `service/{service_id}/version/{service_version}/condition/{name}`
//!
//! Every interpolated value is percent-escaped, so a condition named
//! `a/b c` lands in a single path segment.
//!
//! # Example
//!
//! ```rust
//! use fastly_api::rest::build_path;
//!
//! let path = build_path(
//!     "service/{service_id}/version/{service_version}/vcl/{name}",
//!     &[("service_id", "SU1Z0isxPaozGVKXdv0eY"), ("service_version", "1"), ("name", "my vcl")],
//! );
//! assert_eq!(path, "service/SU1Z0isxPaozGVKXdv0eY/version/1/vcl/my%20vcl");
//! ```

/// Path template for a versioned service collection.
pub const VERSIONED: &str = "service/{service_id}/version/{service_version}";

/// Interpolates `ids` into `template`, percent-escaping each value.
///
/// Placeholders without a matching id are left in place.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

/// Builds `service/{id}/version/{n}` followed by `suffix`.
///
/// `suffix` may itself contain a `{name}` placeholder, filled from `name`.
#[must_use]
pub fn versioned_path(
    service_id: &str,
    service_version: u32,
    suffix: &str,
    name: Option<&str>,
) -> String {
    let template = format!("{VERSIONED}/{suffix}");
    let version = service_version.to_string();

    let mut ids = vec![("service_id", service_id), ("service_version", version.as_str())];
    if let Some(name) = name {
        ids.push(("name", name));
    }

    build_path(&template, &ids)
}
