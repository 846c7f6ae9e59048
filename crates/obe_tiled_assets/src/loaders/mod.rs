//! Readers for the map document and the tileset documents it references.

mod map;
mod tileset;

pub use map::{MapLoaderError, TiledMapAssetLoader};
pub use tileset::{TiledTilesetAssetLoader, TilesetLoaderError, TilesetSource};

/// File stem of an asset path: after the last `/` or `\`, up to the first `.`.
///
/// `"../tilesets/terrain.v2.tsx"` gives `"terrain"`.
pub fn asset_key(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name.split('.').next().unwrap_or(file_name)
}
