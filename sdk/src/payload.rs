//! Decoding of raw sender payloads into typed responses.
//!
//! Payloads are loosely typed. Missing fields default through
//! `#[serde(default)]` on the response types and `null` fields through
//! `deserialize_default_from_null`; an absent payload (`null`) decodes to the
//! type's default value.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::SdkError;

/// Decode `payload` into `T`, treating `null` as `T::default()`.
///
/// # Errors
/// Returns [`SdkError::Decode`] when the payload has the wrong shape.
pub fn decode<T: DeserializeOwned + Default>(payload: Value) -> Result<T, SdkError> {
    if payload.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(payload)?)
}

/// Decode a payload that may be a single record or an array of records.
///
/// An array yields its first record; an empty array or `null` yields
/// `T::default()`.
///
/// # Errors
/// Returns [`SdkError::Decode`] when the record has the wrong shape.
pub fn decode_first<T: DeserializeOwned + Default>(payload: Value) -> Result<T, SdkError> {
    match payload {
        Value::Array(items) => items.into_iter().next().map_or_else(|| Ok(T::default()), decode),
        other => decode(other),
    }
}

/// Decode a payload that is an array of records. `null` and `{}` yield an
/// empty list.
///
/// # Errors
/// Returns [`SdkError::Decode`] when the payload is not an array of `T`.
pub fn decode_list<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, SdkError> {
    if payload.is_null() || payload.as_object().is_some_and(serde_json::Map::is_empty) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(payload)?)
}

/// Deserialize an optional string field that the API sometimes returns as a
/// number or boolean.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
