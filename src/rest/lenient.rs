//! Lenient field decoders for API responses.
//!
//! The Fastly API renders some numbers as strings (a condition's `priority`
//! comes back as `"10"`) and some booleans as `"1"`/`"0"` or `0`/`1`. It may
//! also send `null` where a list is expected. These functions are used with
//! `#[serde(default, deserialize_with = "...")]`.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    String(String),
}

/// Decodes an optional number that may arrive as a JSON number or string.
///
/// `null` and the empty string decode to `None`.
///
/// # Errors
///
/// Fails if a string value does not parse as `T`.
pub fn option_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse().map(Some).map_err(de::Error::custom)
        }
    }
}

/// Decodes an optional boolean that may arrive as `true`, `1`, `"1"` or `"true"`.
///
/// # Errors
///
/// Fails on strings other than `1`/`0`/`true`/`false` (case-insensitive).
pub fn option_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolLike>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolLike::Bool(b)) => Ok(Some(b)),
        Some(BoolLike::Int(i)) => Ok(Some(i != 0)),
        Some(BoolLike::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(de::Error::custom(format!("invalid boolean: {other}"))),
        },
    }
}

/// Decodes an optional string that may arrive as a JSON number.
///
/// # Errors
///
/// Fails on values that are neither strings nor numbers.
pub fn option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString<serde_json::Number>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n.to_string())),
        Some(NumberOrString::String(s)) => Ok(Some(s)),
    }
}

/// Decodes a value whose `null` means "empty", such as a `null` list.
///
/// # Errors
///
/// Fails if a non-null value does not decode as `T`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Sample {
        #[serde(default, deserialize_with = "option_number")]
        priority: Option<i64>,
        #[serde(default, deserialize_with = "option_number")]
        ttl: Option<u32>,
        #[serde(default, deserialize_with = "option_bool")]
        main: Option<bool>,
        #[serde(default, deserialize_with = "option_string")]
        price: Option<String>,
        #[serde(default, deserialize_with = "null_default")]
        tags: Vec<String>,
    }

    fn parse(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_number_from_number_or_string() {
        assert_eq!(parse(r#"{"priority": 10}"#).priority, Some(10));
        assert_eq!(parse(r#"{"priority": "10"}"#).priority, Some(10));
        assert_eq!(parse(r#"{"ttl": "3600"}"#).ttl, Some(3600));
    }

    #[test]
    fn test_number_missing_null_or_empty_is_none() {
        assert_eq!(parse("{}").priority, None);
        assert_eq!(parse(r#"{"priority": null}"#).priority, None);
        assert_eq!(parse(r#"{"priority": ""}"#).priority, None);
    }

    #[test]
    fn test_number_rejects_garbage() {
        assert!(serde_json::from_str::<Sample>(r#"{"priority": "high"}"#).is_err());
    }

    #[test]
    fn test_bool_forms() {
        assert_eq!(parse(r#"{"main": true}"#).main, Some(true));
        assert_eq!(parse(r#"{"main": 0}"#).main, Some(false));
        assert_eq!(parse(r#"{"main": "1"}"#).main, Some(true));
        assert_eq!(parse(r#"{"main": "false"}"#).main, Some(false));
        assert_eq!(parse(r#"{"main": null}"#).main, None);
        assert!(serde_json::from_str::<Sample>(r#"{"main": "maybe"}"#).is_err());
    }

    #[test]
    fn test_string_from_string_or_number() {
        assert_eq!(parse(r#"{"price": "12.99"}"#).price.as_deref(), Some("12.99"));
        assert_eq!(parse(r#"{"price": 8.5}"#).price.as_deref(), Some("8.5"));
        assert_eq!(parse("{}").price, None);
    }

    #[test]
    fn test_null_list_decodes_empty() {
        assert!(parse(r#"{"tags": null}"#).tags.is_empty());
        assert!(parse("{}").tags.is_empty());
        assert_eq!(parse(r#"{"tags": ["a"]}"#).tags, vec!["a"]);
    }
}
