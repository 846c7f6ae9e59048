use serde::Serialize;

use super::collision::ScenePoint;
use super::keyed::KeyedMap;
use super::object::GameObject;
use super::Unit;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tiles {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Map width in tiles.
    pub width: u32,
    pub height: u32,
    pub layers: KeyedMap<TileLayer>,
    pub sources: KeyedMap<TilesetEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
    /// Z-order, higher renders first.
    pub layer: i64,
    pub visible: bool,
    pub opacity: f64,
    /// Global tile ids, row-major, `width * height` entries.
    pub tiles: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TilesetEntry {
    #[serde(rename = "firstTileId")]
    pub first_tile_id: u32,
    pub columns: u32,
    #[serde(rename = "tilecount")]
    pub tile_count: u32,
    pub margin: u32,
    pub spacing: u32,
    pub tile: Size,
    pub image: TilesetImage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<AnimatedTile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collisions: Vec<TileCollision>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<GameObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TilesetImage {
    pub width: u32,
    pub height: u32,
    /// Relative to the conversion's base directory.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimatedTile {
    /// Local tile id.
    pub id: u32,
    pub frames: Vec<AnimationFrame>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationFrame {
    /// Frame duration in milliseconds.
    pub clock: u32,
    pub tileid: u32,
}

/// Collision shape attached to every instance of a tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileCollision {
    /// Local tile id.
    pub id: u32,
    pub points: Vec<ScenePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub unit: Unit,
}
