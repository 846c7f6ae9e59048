//! # `obe_tiled_assets`
//!
//! Layer 1 of `obe_tiled`: the in-memory model of a Tiled map exported as JSON,
//! plus the loaders that read the map document and the tileset documents it
//! references.
//!
//! Nothing in this crate knows about the target scene format. Values are decoded
//! once at the boundary (layer kinds, custom property types, the format version)
//! so later layers can match on them instead of re-inspecting strings.

pub mod assets;
pub mod loaders;

/// Prelude module for convenient imports
///
/// # Example
/// ```no_run
/// use obe_tiled_assets::prelude::*;
///
/// let map = TiledMapAssetLoader.load("maps/level1.json").unwrap();
/// println!("{} layers, type field '{}'", map.layers.len(), map.version.type_field().field_name());
/// ```
pub mod prelude {
    pub use crate::assets::{
        layer::{GroupLayerData, ImageLayerData, Layer, ObjectLayerData, TileLayerData},
        map::{TiledMapAsset, TilesetReference},
        object::{ObjectGroup, Point, TiledObject},
        properties::{Properties, Property, PropertyError, PropertyValue},
        tileset::{Frame, LoadedTileset, TileData, TiledTilesetAsset},
        version::{SchemaVersion, TypeField, VersionError},
    };
    pub use crate::loaders::{
        MapLoaderError, TiledMapAssetLoader, TiledTilesetAssetLoader, TilesetLoaderError,
        TilesetSource, asset_key,
    };
}
