//! Wire envelopes shared by several endpoints.

use super::{AddressNote, DataObject, TrackingHistory};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The service's error body: `{"errors": ["...", "..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// `{"status": true}` style acknowledgements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,
}

/// A list with the total count of matching records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            total: 0,
        }
    }
}

/// `{"results": [...]}` without a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptimizationsResponse {
    #[serde(default)]
    pub optimizations: Vec<DataObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoveOptimizationResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub removed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeletedDestinationResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub deleted: bool,

    #[serde(default)]
    pub route_destination_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DuplicateRouteResponse {
    #[serde(default)]
    pub optimization_problem_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteRoutesResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub deleted: bool,

    #[serde(default)]
    pub route_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoveDestinationResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,

    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarkDepartedResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,

    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NoteResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,

    #[serde(default)]
    pub note_id: Option<Value>,

    #[serde(default)]
    pub upload_id: Option<String>,

    #[serde(default)]
    pub note: Option<AddressNote>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomNoteTypeResult {
    #[serde(default)]
    pub result: String,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub affected: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeviceHistoryResponse {
    #[serde(default)]
    pub data: Vec<TrackingHistory>,
}

/// Address book search results: each row holds the requested fields as
/// strings, in the order given by `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchLocationsResponse {
    #[serde(default)]
    pub results: Vec<Vec<Value>>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total: u64,

    #[serde(default)]
    pub fields: Vec<String>,
}

impl SearchLocationsResponse {
    /// Returns the column of `field` in every row, as text.
    pub fn column(&self, field: &str) -> Vec<Option<String>> {
        let Some(index) = self.fields.iter().position(|f| f == field) else {
            return Vec::new();
        };
        self.results
            .iter()
            .map(|row| row.get(index).and_then(value_text))
            .collect()
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Either a single object or an array of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Accepts `true`/`false`, `1`/`0`, and their string forms.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(s) => Ok(matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1")),
        Value::Null => Ok(false),
        other => Err(de::Error::custom(format!("expected a boolean, got {}", other))),
    }
}

/// Accepts counts sent as numbers or numeric strings.
fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("expected a count, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a count, got {:?}", s))),
        Value::Null => Ok(0),
        other => Err(de::Error::custom(format!("expected a count, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_accepts_service_variants() {
        for (raw, expected) in [
            (json!({ "status": true }), true),
            (json!({ "status": 1 }), true),
            (json!({ "status": "1" }), true),
            (json!({ "status": 1.0 }), true),
            (json!({ "status": 0.0 }), false),
            (json!({ "status": false }), false),
            (json!({ "status": null }), false),
            (json!({}), false),
        ] {
            let parsed: StatusResponse = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(parsed.status, expected, "{}", raw);
        }
    }

    #[test]
    fn page_keeps_total() {
        let page: Page<Value> =
            serde_json::from_value(json!({ "results": [{}, {}, {}], "total": "3" })).unwrap();
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn search_rows_by_field() {
        let found: SearchLocationsResponse = serde_json::from_value(json!({
            "results": [[3928601, "Home"], [3928602, null]],
            "total": 2,
            "fields": ["address_id", "first_name"]
        }))
        .unwrap();
        assert_eq!(found.column("address_id"), vec![Some("3928601".to_string()), Some("3928602".to_string())]);
        assert_eq!(found.column("first_name"), vec![Some("Home".to_string()), None]);
        assert!(found.column("missing").is_empty());
    }

    #[test]
    fn one_or_many_flattens() {
        let one: OneOrMany<i32> = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(one.into_vec(), vec![7]);
        let many: OneOrMany<i32> = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(many.into_vec(), vec![1, 2]);
    }
}
