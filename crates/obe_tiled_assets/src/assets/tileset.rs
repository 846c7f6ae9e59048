use std::path::PathBuf;

use serde::Deserialize;

use super::object::ObjectGroup;

/// External tileset document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TiledTilesetAsset {
    #[serde(default)]
    pub name: String,
    pub columns: u32,
    #[serde(rename = "tilecount")]
    pub tile_count: u32,
    #[serde(default)]
    pub margin: u32,
    #[serde(default)]
    pub spacing: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    pub image: String,
    #[serde(rename = "imagewidth")]
    pub image_width: u32,
    #[serde(rename = "imageheight")]
    pub image_height: u32,
    #[serde(default)]
    pub tiles: Vec<TileData>,
}

/// Per-tile override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileData {
    /// Local id, without the map's `firstgid` offset.
    pub id: u32,
    #[serde(default)]
    pub animation: Option<Vec<Frame>>,
    #[serde(rename = "objectgroup", default)]
    pub object_group: Option<ObjectGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Frame {
    #[serde(rename = "tileid")]
    pub tile_id: u32,
    /// Milliseconds.
    pub duration: u32,
}

/// A tileset document together with where it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTileset {
    pub asset: TiledTilesetAsset,
    pub path: PathBuf,
    /// Directory the tileset's image path is relative to.
    pub directory: PathBuf,
}
