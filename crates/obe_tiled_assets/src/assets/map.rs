use serde::Deserialize;

use super::layer::Layer;
use super::properties::Properties;
use super::version::SchemaVersion;
use crate::loaders::asset_key;

/// Root map document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TiledMapAsset {
    pub version: SchemaVersion,
    #[serde(rename = "tiledversion", default)]
    pub tiled_version: Option<String>,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    #[serde(default)]
    pub infinite: bool,
    pub layers: Vec<Layer>,
    pub tilesets: Vec<TilesetReference>,
    #[serde(default)]
    pub properties: Properties,
}

/// External tileset referenced by the map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TilesetReference {
    #[serde(rename = "firstgid")]
    pub first_gid: u32,
    pub source: String,
}

impl TilesetReference {
    /// Key of the tileset in the scene, the file stem of `source`.
    pub fn key(&self) -> &str {
        asset_key(&self.source)
    }
}
