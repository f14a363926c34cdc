//! Decoding helpers shared by the response DTOs.
//!
//! Responses are decoded from a JSON object only. Going through
//! `Map<String, Value>` rejects arrays and scalars up front, which the
//! derived sequence path of `Deserialize` would otherwise accept.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Read an optional field. Absent and `null` both give `None`.
pub(crate) fn optional_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &str,
) -> serde_json::Result<Option<T>> {
    object.get(key).map_or(Ok(None), Option::<T>::deserialize)
}
