use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::assets::map::TilesetReference;
use crate::assets::tileset::{LoadedTileset, TiledTilesetAsset};

#[derive(Debug, Error)]
pub enum TilesetLoaderError {
    #[error("Failed to read tileset '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tileset '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves a map's tileset references to tileset documents.
pub trait TilesetSource {
    fn load_tileset(
        &self,
        map_dir: &Path,
        reference: &TilesetReference,
    ) -> Result<LoadedTileset, TilesetLoaderError>;
}

/// Reads tilesets from disk.
///
/// The reference's extension is replaced with `.json`, so a map pointing at
/// `terrain.tsx` reads the `terrain.json` export stored next to it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiledTilesetAssetLoader;

impl TilesetSource for TiledTilesetAssetLoader {
    fn load_tileset(
        &self,
        map_dir: &Path,
        reference: &TilesetReference,
    ) -> Result<LoadedTileset, TilesetLoaderError> {
        let requested = map_dir
            .join(reference.source.replace('\\', "/"))
            .with_extension("json");
        let path = fs::canonicalize(&requested).map_err(|source| TilesetLoaderError::Io {
            path: requested.clone(),
            source,
        })?;
        debug!("Loading tileset at path {}", path.display());

        let text = fs::read_to_string(&path).map_err(|source| TilesetLoaderError::Io {
            path: path.clone(),
            source,
        })?;
        let asset: TiledTilesetAsset =
            serde_json::from_str(&text).map_err(|source| TilesetLoaderError::Parse {
                path: path.clone(),
                source,
            })?;

        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| map_dir.to_path_buf());

        Ok(LoadedTileset {
            asset,
            path,
            directory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tileset_reports_json_path() {
        let reference = TilesetReference {
            first_gid: 1,
            source: "missing/terrain.tsx".to_string(),
        };
        let err = TiledTilesetAssetLoader
            .load_tileset(Path::new("/nonexistent"), &reference)
            .unwrap_err();

        match err {
            TilesetLoaderError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/missing/terrain.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
