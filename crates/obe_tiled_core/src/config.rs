//! Conversion settings.

use std::path::{Path, PathBuf};

use obe_tiled_assets::prelude::asset_key;

use crate::scene::{Referential, Unit};

/// Settings for one conversion run.
///
/// # Example
///
/// ```rust
/// # use std::path::Path;
/// # use obe_tiled_core::config::ConvertConfig;
/// let config = ConvertConfig::for_files(
///     Path::new("maps/level1.json"),
///     Path::new("scenes/level1.map.vili"),
///     Path::new("."),
/// );
/// assert_eq!(config.scene_name, "level1");
/// assert_eq!(config.map_dir, Path::new("maps"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Written to `Meta.name`.
    pub scene_name: String,

    /// Directory of the map document. Tileset references and image-layer
    /// images are resolved against it.
    pub map_dir: PathBuf,

    /// Image paths in the scene are made relative to this directory.
    pub base_dir: PathBuf,

    pub view: ViewConfig,
}

impl ConvertConfig {
    pub fn for_files(input_file: &Path, output_file: &Path, base_dir: &Path) -> Self {
        let output = output_file.to_string_lossy();
        Self {
            scene_name: asset_key(&output).to_string(),
            map_dir: input_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            base_dir: base_dir.to_path_buf(),
            view: ViewConfig::default(),
        }
    }
}

/// Initial camera written to the scene's `View` block.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub unit: Unit,
    pub referential: Referential,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            x: 0.0,
            y: 0.0,
            unit: Unit::SceneUnits,
            referential: Referential::TopLeft,
        }
    }
}
