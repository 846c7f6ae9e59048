//! End-to-end conversion: load the map, build the scene, write it out.

use std::fs;
use std::path::{Path, PathBuf};

use obe_tiled_assets::prelude::{
    MapLoaderError, TiledMapAsset, TiledMapAssetLoader, TiledTilesetAssetLoader,
};
use obe_tiled_core::prelude::{ConvertConfig, Scene, TransformError, build_scene};
use thiserror::Error;
use tracing::info;

/// Scene document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// vili, the format ObEngine loads.
    Vili,
    /// Pretty-printed JSON of the same tree.
    Json,
}

impl OutputFormat {
    /// JSON for a `.json` output file, vili otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Vili,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Map(#[from] MapLoaderError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[cfg(feature = "vili")]
    #[error(transparent)]
    Dump(#[from] obe_tiled_vili::DumpError),

    #[error("Failed to serialize scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write scene '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output format {0:?} is not available in this build")]
    FormatUnavailable(OutputFormat),
}

/// One conversion job.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    /// Image paths in the scene are relative to this directory.
    pub base_dir: PathBuf,
    /// Inferred from `output_file` when `None`.
    pub format: Option<OutputFormat>,
}

impl ConvertRequest {
    pub fn new(
        input_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            base_dir: base_dir.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output_file))
    }

    pub fn config(&self) -> ConvertConfig {
        ConvertConfig::for_files(&self.input_file, &self.output_file, &self.base_dir)
    }
}

/// Load, convert and build the scene without writing it.
pub fn convert(request: &ConvertRequest) -> Result<Scene, ConvertError> {
    let map: TiledMapAsset = TiledMapAssetLoader.load(&request.input_file)?;
    let scene = build_scene(&map, &request.config(), &TiledTilesetAssetLoader)?;
    Ok(scene)
}

/// Render a scene in the given format.
pub fn render(scene: &Scene, format: OutputFormat) -> Result<String, ConvertError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(scene)?),
        #[cfg(feature = "vili")]
        OutputFormat::Vili => {
            let options = obe_tiled_vili::DumpOptions::for_scene(scene);
            Ok(obe_tiled_vili::dump_scene(scene, &options)?)
        }
        #[cfg(not(feature = "vili"))]
        OutputFormat::Vili => Err(ConvertError::FormatUnavailable(format)),
    }
}

/// Convert `request.input_file` and write the result to `request.output_file`.
pub fn run(request: &ConvertRequest) -> Result<(), ConvertError> {
    let scene = convert(request)?;
    let format = request.output_format();
    let text = render(&scene, format)?;

    fs::write(&request.output_file, text).map_err(|source| ConvertError::Io {
        path: request.output_file.clone(),
        source,
    })?;
    info!(
        "Wrote {:?} scene '{}' to {}",
        format,
        scene.meta.name,
        request.output_file.display()
    );
    Ok(())
}
