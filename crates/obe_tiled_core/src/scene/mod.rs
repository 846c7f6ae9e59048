//! Target scene tree.
//!
//! Field declaration order is output order, and every keyed collection is a
//! [`KeyedMap`], so serializing a [`Scene`] reproduces the processing order.

mod collision;
mod keyed;
mod object;
mod sprite;
mod tiles;

use serde::Serialize;

pub use collision::{Collision, ScenePoint};
pub use keyed::KeyedMap;
pub use object::{GameObject, RequireValue};
pub use sprite::{Rect, Sprite, Transform};
pub use tiles::{
    AnimatedTile, AnimationFrame, Size, TileCollision, TileLayer, Tiles, TilesetEntry,
    TilesetImage,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    #[serde(rename = "Meta")]
    pub meta: Meta,
    #[serde(rename = "View")]
    pub view: View,
    #[serde(rename = "Tiles")]
    pub tiles: Tiles,
    #[serde(rename = "Sprites", skip_serializing_if = "KeyedMap::is_empty")]
    pub sprites: KeyedMap<Sprite>,
    #[serde(rename = "Collisions", skip_serializing_if = "KeyedMap::is_empty")]
    pub collisions: KeyedMap<Collision>,
    #[serde(rename = "GameObjects", skip_serializing_if = "KeyedMap::is_empty")]
    pub game_objects: KeyedMap<GameObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub name: String,
}

/// Initial camera.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub size: f64,
    pub position: ViewPosition,
    pub referential: Referential,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewPosition {
    pub x: f64,
    pub y: f64,
    pub unit: Unit,
}

/// Engine coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    ViewPercentage,
    ViewPixels,
    ViewUnits,
    ScenePixels,
    SceneUnits,
}

/// Anchor point of a positioned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Referential {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}
