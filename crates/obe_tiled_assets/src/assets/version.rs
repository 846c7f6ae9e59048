//! Tiled format version handling.
//!
//! The JSON schema changed in Tiled 1.9: the object "type" was renamed to
//! "class". The map's declared version is parsed once and the resulting
//! [`TypeField`] is passed to whatever needs to read an object's type tag.

use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// First format version that stores the object type tag under `class`.
const CLASS_FIELD_SINCE: [u32; 2] = [1, 9];

/// Dot-separated format version (`"1.10.2"`), compared component-wise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion(Vec<u32>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Empty format version")]
    Empty,

    #[error("Invalid component '{component}' in format version '{version}'")]
    InvalidComponent { version: String, component: String },
}

/// Which object field carries the type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeField {
    /// Tiled 1.9 and later.
    Class,
    /// Everything before 1.9.
    Type,
}

impl TypeField {
    /// JSON field name holding the type tag.
    pub fn field_name(self) -> &'static str {
        match self {
            TypeField::Class => "class",
            TypeField::Type => "type",
        }
    }
}

impl SchemaVersion {
    pub fn new(components: impl Into<Vec<u32>>) -> Self {
        Self(components.into())
    }

    /// Parse a version string such as `"1.8"` or `"1.10.2"`.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(VersionError::Empty);
        }

        text.split('.')
            .map(|component| {
                component
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| VersionError::InvalidComponent {
                        version: text.to_string(),
                        component: component.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn type_field(&self) -> TypeField {
        if self.0.as_slice() < CLASS_FIELD_SINCE.as_slice() {
            TypeField::Type
        } else {
            TypeField::Class
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for SchemaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Maps saved before Tiled 1.2 store the version as a JSON number.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawVersion {
            Text(String),
            Number(serde_json::Number),
        }

        let text = match RawVersion::deserialize(deserializer)? {
            RawVersion::Text(text) => text,
            RawVersion::Number(number) => number.to_string(),
        };
        SchemaVersion::parse(&text).map_err(serde::de::Error::custom)
    }
}
