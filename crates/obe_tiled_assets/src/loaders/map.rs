use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::assets::map::TiledMapAsset;

/// Loader for Tiled maps exported as JSON (`.json` / `.tmj`).
#[derive(Debug, Default, Clone, Copy)]
pub struct TiledMapAssetLoader;

#[derive(Debug, Error)]
pub enum MapLoaderError {
    #[error("Failed to read map '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse map '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TiledMapAssetLoader {
    pub fn load(&self, path: impl AsRef<Path>) -> Result<TiledMapAsset, MapLoaderError> {
        let path = path.as_ref();
        debug!("Loading map at path {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| MapLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(path, &text)
    }

    /// Parse an already-read map document. `path` is only used in errors.
    pub fn parse(&self, path: &Path, text: &str) -> Result<TiledMapAsset, MapLoaderError> {
        serde_json::from_str(text).map_err(|source| MapLoaderError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
