//! Parsed sidecar records
//!
//! Every document or folder on the tablet is described by a `<id>.metadata`
//! JSON file; documents usually carry a `<id>.content` sidecar with extended
//! fields. The identifier is the file's stem, never a field inside the
//! content. The tablet writes epoch-millisecond timestamps as decimal
//! strings, so the extended fields accept either representation; a
//! wrong-shaped optional field becomes `None` rather than failing the
//! whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Entry kind recorded in a metadata file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EntryType {
    /// A notebook or imported document
    #[serde(rename = "DocumentType")]
    Document,
    /// A folder
    #[serde(rename = "CollectionType")]
    Collection,
}

/// One parsed `<id>.metadata` record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Display name shown on the tablet
    pub visible_name: String,

    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Soft-delete flag
    pub deleted: bool,

    /// Identifier of the containing folder; empty string means root
    pub parent: String,

    /// Epoch milliseconds of the last modification
    #[serde(default, deserialize_with = "lenient_millis")]
    pub last_modified: Option<i64>,

    /// Epoch milliseconds of the last open
    #[serde(default, deserialize_with = "lenient_millis")]
    pub last_opened: Option<i64>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub last_opened_page: Option<u64>,
}

impl Metadata {
    /// Only document-type entries are notebooks; folders never are
    pub fn is_notebook(&self) -> bool {
        self.entry_type == EntryType::Document
    }
}

/// Extended fields from the optional `<id>.content` sidecar
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub page_count: Option<u64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub file_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub size_in_bytes: Option<u64>,
}

fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_u64))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
