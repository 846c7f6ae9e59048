//! Custom properties attached to maps, layers, objects and tiles.
//!
//! Tiled writes each property as `{name, type, value, propertytype?}`. The
//! `type` tag is decoded once here into [`PropertyValue`] so nothing downstream
//! compares type strings again.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Decoded value of a custom property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// `#AARRGGBB` as written by the editor, not parsed.
    Color(String),
    /// File path as written by the editor, not resolved.
    File(String),
    /// Reference to another object by its source id. `0` means "no object".
    Object(u32),
    /// Custom class value. Kept raw, nothing in the scene format can hold it.
    Class {
        property_type: Option<String>,
        value: Value,
    },
}

impl PropertyValue {
    /// Name of the editor type tag this value was decoded from.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
            PropertyValue::Color(_) => "color",
            PropertyValue::File(_) => "file",
            PropertyValue::Object(_) => "object",
            PropertyValue::Class { .. } => "class",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("Property '{name}' has unknown type '{type_name}'")]
    UnknownType { name: String, type_name: String },

    #[error("Property '{name}' of type '{type_name}' has invalid value {value}")]
    InvalidValue {
        name: String,
        type_name: String,
        value: Value,
    },
}

/// A single named custom property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawProperty")]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

#[derive(Deserialize)]
struct RawProperty {
    name: String,
    #[serde(rename = "type", default = "default_property_type")]
    type_name: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    propertytype: Option<String>,
}

fn default_property_type() -> String {
    "string".to_string()
}

impl TryFrom<RawProperty> for Property {
    type Error = PropertyError;

    fn try_from(raw: RawProperty) -> Result<Self, Self::Error> {
        let invalid = |raw: &RawProperty| PropertyError::InvalidValue {
            name: raw.name.clone(),
            type_name: raw.type_name.clone(),
            value: raw.value.clone(),
        };

        let value = match raw.type_name.as_str() {
            "bool" => raw
                .value
                .as_bool()
                .map(PropertyValue::Bool)
                .ok_or_else(|| invalid(&raw))?,
            "int" => raw
                .value
                .as_i64()
                .map(PropertyValue::Int)
                .ok_or_else(|| invalid(&raw))?,
            "float" => raw
                .value
                .as_f64()
                .map(PropertyValue::Float)
                .ok_or_else(|| invalid(&raw))?,
            "object" => raw
                .value
                .as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .map(PropertyValue::Object)
                .ok_or_else(|| invalid(&raw))?,
            "string" | "color" | "file" => {
                let text = raw
                    .value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(&raw))?;
                match raw.type_name.as_str() {
                    "color" => PropertyValue::Color(text),
                    "file" => PropertyValue::File(text),
                    _ => PropertyValue::String(text),
                }
            }
            "class" => PropertyValue::Class {
                property_type: raw.propertytype.clone(),
                value: raw.value.clone(),
            },
            _ => {
                return Err(PropertyError::UnknownType {
                    name: raw.name.clone(),
                    type_name: raw.type_name.clone(),
                });
            }
        };

        Ok(Property {
            name: raw.name,
            value,
        })
    }
}

/// Property list in source order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Properties(Vec<Property>);

impl Properties {
    pub fn new(properties: Vec<Property>) -> Self {
        Self(properties)
    }

    /// First property with this name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0
            .iter()
            .find(|property| property.name == name)
            .map(|property| &property.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
