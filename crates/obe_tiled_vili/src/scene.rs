use std::fs;
use std::path::{Path, PathBuf};

use obe_tiled_core::Scene;
use thiserror::Error;
use tracing::debug;

use crate::options::DumpOptions;
use crate::writer::dump;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Failed to serialize scene: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write scene '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn dump_scene(scene: &Scene, options: &DumpOptions) -> Result<String, DumpError> {
    let tree = serde_json::to_value(scene)?;
    Ok(dump(&tree, options))
}

pub fn write_scene(
    scene: &Scene,
    path: impl AsRef<Path>,
    options: &DumpOptions,
) -> Result<(), DumpError> {
    let path = path.as_ref();
    let text = dump_scene(scene, options)?;
    debug!("Writing {} bytes to {}", text.len(), path.display());
    fs::write(path, text).map_err(|source| DumpError::Io {
        path: path.to_path_buf(),
        source,
    })
}
