//! Form encoding for create and update requests.
//!
//! Input structs declare their wire names with serde attributes; this module
//! turns them into an `application/x-www-form-urlencoded` body:
//!
//! - `null` (an unset `Option`) is skipped
//! - strings are sent as-is, numbers and booleans via `to_string`
//! - arrays become repeated keys
//! - nested objects are sent as a JSON string

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// Encodes `input` as a form body.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if `input` cannot be represented as JSON.
///
/// # Example
///
/// ```rust
/// use fastly_api::rest::to_form_body;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Input {
///     name: String,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     priority: Option<i32>,
/// }
///
/// let body = to_form_body(&Input { name: "my condition".into(), priority: None }, "CreateCondition").unwrap();
/// assert_eq!(body, "name=my+condition");
/// ```
pub fn to_form_body<T: Serialize>(
    input: &T,
    operation: &'static str,
) -> Result<String, ResourceError> {
    let value = serde_json::to_value(input)
        .map_err(|source| ResourceError::Encode { operation, source })?;

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    serializer.append_pair(&key, &s);
                }
                Value::Number(n) => {
                    serializer.append_pair(&key, &n.to_string());
                }
                Value::Bool(b) => {
                    serializer.append_pair(&key, &b.to_string());
                }
                Value::Array(arr) => {
                    for item in arr {
                        match item {
                            Value::Null => {}
                            Value::String(s) => {
                                serializer.append_pair(&key, &s);
                            }
                            other => {
                                serializer.append_pair(&key, &other.to_string());
                            }
                        }
                    }
                }
                Value::Object(_) => {
                    serializer.append_pair(&key, &val.to_string());
                }
            }
        }
    }

    Ok(serializer.finish())
}
