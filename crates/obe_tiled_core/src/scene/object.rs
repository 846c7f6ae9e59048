use serde::Serialize;

use super::keyed::KeyedMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameObject {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(rename = "Requires")]
    pub requires: KeyedMap<RequireValue>,
    /// Global tile id, only set on tile point objects.
    #[serde(rename = "tileId", skip_serializing_if = "Option::is_none")]
    pub tile_id: Option<u32>,
    /// Only set on tile point objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Value of a `Requires` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequireValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for RequireValue {
    fn from(value: bool) -> Self {
        RequireValue::Bool(value)
    }
}

impl From<i64> for RequireValue {
    fn from(value: i64) -> Self {
        RequireValue::Int(value)
    }
}

impl From<f64> for RequireValue {
    fn from(value: f64) -> Self {
        RequireValue::Float(value)
    }
}

impl From<String> for RequireValue {
    fn from(value: String) -> Self {
        RequireValue::String(value)
    }
}
