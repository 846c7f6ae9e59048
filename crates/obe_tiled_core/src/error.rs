use obe_tiled_assets::prelude::TilesetLoaderError;
use thiserror::Error;

use crate::paths::PathError;

/// Anything that aborts a conversion. There is no partial result.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Could not find property {name} on {owner}")]
    MissingProperty { name: String, owner: String },

    #[error("{owner} declares '{present}' but '{missing}' property not found")]
    UnpairedProperty {
        present: String,
        missing: String,
        owner: String,
    },

    #[error("Property {name} on {owner} is not of type {expected}")]
    PropertyType {
        name: String,
        owner: String,
        expected: &'static str,
    },

    #[error(
        "Object of type {object_type} ('{dependent}') depends on other object with id {missing_id}, please reorder them"
    )]
    ForwardReference {
        object_type: String,
        dependent: String,
        missing_id: u32,
    },

    #[error("Duplicate key '{key}' in {collection}")]
    DuplicateKey {
        collection: &'static str,
        key: String,
    },

    #[error("Tile layer '{layer}' has no inline tile data (chunked layers are not supported)")]
    MissingTileData { layer: String },

    #[error("Tile id of point object {object_id} overflows with first tile id {first_gid}")]
    TileIdOverflow { object_id: u32, first_gid: u32 },

    #[error("Image layer '{layer}' repeats {repeat_x}x{repeat_y} times, more than {max} copies")]
    TooManyRepeats {
        layer: String,
        repeat_x: u32,
        repeat_y: u32,
        max: u64,
    },

    #[error("Infinite maps are not supported")]
    InfiniteMap,

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Tileset(#[from] TilesetLoaderError),
}
