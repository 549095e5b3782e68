//! Query-string serialization helpers.

use crate::{Error, Result};
use serde::{Serialize, Serializer};

/// The query parameter carrying the account's API key.
pub(crate) const API_KEY_PARAM: &str = "api_key";

/// Serializes a parameter object into ordered query pairs.
///
/// Unset optional fields produce no pair. Any `api_key` pair is dropped so
/// the client can inject its own key exactly once.
pub(crate) fn to_pairs<Q: Serialize + ?Sized>(params: &Q) -> Result<Vec<(String, String)>> {
    let encoded =
        serde_urlencoded::to_string(params).map_err(|e| Error::SerializationFailed(e.to_string()))?;
    Ok(url::form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .filter(|(key, _)| key != API_KEY_PARAM)
        .collect())
}

/// Serializes `Option<bool>` query flags as `1`/`0`.
///
/// Use together with `skip_serializing_if = "Option::is_none"`.
pub(crate) mod flag {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match value {
            Some(true) => serializer.serialize_u8(1),
            Some(false) => serializer.serialize_u8(0),
            None => serializer.serialize_none(),
        }
    }
}

/// Serializes a required `bool` as `1`/`0`.
pub(crate) fn bit<S: Serializer>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// Joins IDs with commas, the list format the service expects in queries.
pub(crate) fn comma_joined<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
