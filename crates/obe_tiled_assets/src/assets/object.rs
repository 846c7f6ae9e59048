use serde::Deserialize;

use super::properties::Properties;
use super::version::TypeField;

/// Polygon vertex, relative to the owning object's origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A placed object from an object group.
///
/// Both `class` and `type` are kept; which one carries the type tag depends
/// on the map's format version, see [`TiledObject::type_tag`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TiledObject {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub polygon: Option<Vec<Point>>,
    #[serde(default)]
    pub point: Option<bool>,
    #[serde(default)]
    pub properties: Properties,
}

impl TiledObject {
    /// Non-empty type tag read from the field selected by `field`.
    pub fn type_tag(&self, field: TypeField) -> Option<&str> {
        let tag = match field {
            TypeField::Class => self.class.as_deref(),
            TypeField::Type => self.type_name.as_deref(),
        };
        tag.filter(|tag| !tag.is_empty())
    }

    pub fn is_point(&self) -> bool {
        self.point == Some(true)
    }
}

/// Objects of an object-group layer or of a tile's collision group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectGroup {
    #[serde(default)]
    pub objects: Vec<TiledObject>,
}
