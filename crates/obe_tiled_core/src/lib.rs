//! # `obe_tiled_core`
//!
//! Layer 2 of `obe_tiled`: turns a loaded [`TiledMapAsset`] into an ObEngine
//! [`Scene`].
//!
//! The conversion is a single ordered pass:
//! 1. Layers are walked in source order, tile layers become `Tiles.layers`,
//!    object groups feed game objects and collisions, image layers become sprites.
//! 2. Each referenced tileset is loaded through a [`TilesetSource`] and flattened
//!    into `Tiles.sources` with its animations, collisions and point objects.
//!
//! Order matters twice: default layer z-order counts down in source order, and an
//! object may only reference objects that were converted before it.
//!
//! [`TiledMapAsset`]: obe_tiled_assets::prelude::TiledMapAsset
//! [`TilesetSource`]: obe_tiled_assets::prelude::TilesetSource

pub mod build;
pub mod config;
pub mod context;
pub mod error;
pub mod paths;
pub mod properties;
pub mod scene;

pub use build::build_scene;
pub use scene::Scene;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::build::build_scene;
    pub use crate::build::images::repeat_sprites;
    pub use crate::build::objects::{ObjectKind, classify_object, make_object_id};
    pub use crate::config::{ConvertConfig, ViewConfig};
    pub use crate::context::{ConvertContext, ObjectIdTable};
    pub use crate::error::TransformError;
    pub use crate::paths::{PathError, resolve_asset_path};
    pub use crate::properties::{FromTiledProperty, find_optional_property, find_property};
    pub use crate::scene::{
        AnimatedTile, AnimationFrame, Collision, GameObject, KeyedMap, Meta, Rect, Referential,
        RequireValue, Scene, ScenePoint, Size, Sprite, TileCollision, TileLayer, TilesetImage,
        Tiles, TilesetEntry, Transform, Unit, View, ViewPosition,
    };
}
