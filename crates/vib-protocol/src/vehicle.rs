use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Exact-match key on a record (`id`, `hex`).
///
/// Datasets mix string and numeric identifiers, so both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Text(String),
    Number(serde_json::Number),
}

impl RecordKey {
    /// Compare against a query without case folding.
    ///
    /// Numeric keys compare by their JSON rendering, so `400` matches `"400"`.
    pub fn matches(&self, query: &str) -> bool {
        match self {
            RecordKey::Text(s) => s == query,
            RecordKey::Number(n) => n.to_string() == query,
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKey::Text(s) => write!(f, "{s}"),
            RecordKey::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        RecordKey::Text(value.to_string())
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        RecordKey::Number(value.into())
    }
}

/// One entry of the remote vehicles dataset.
///
/// Every field is optional; unknown keys are ignored. Values of an
/// unexpected type never fail the record: scalars are read as text and
/// arrays/objects are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(default, deserialize_with = "lenient_key", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    #[serde(default, deserialize_with = "lenient_key", skip_serializing_if = "Option::is_none")]
    pub hex: Option<RecordKey>,
    /// Display name (e.g. "Landstalker").
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Internal model name (e.g. "landstal").
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Game text label.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub gxt: Option<String>,
    /// Free text, shown but never searched.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn lenient_key<'de, D>(deserializer: D) -> Result<Option<RecordKey>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(RecordKey::Text(s)),
        Some(Value::Number(n)) => Some(RecordKey::Number(n)),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Ordered snapshot of the dataset, fetched per query.
pub type Dataset = Vec<VehicleRecord>;
