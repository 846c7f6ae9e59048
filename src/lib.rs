//! # `obe_tiled`
//!
//! Converts maps made with the [Tiled](https://www.mapeditor.org/) editor, exported
//! as JSON, into ObEngine scene documents.
//!
//! ## Architecture
//!
//! - **Layer 1** ([`assets`]): Tiled map and tileset documents, and their loaders
//! - **Layer 2** ([`core`]): map to scene transformation
//! - **Layer 3** (`vili`, optional): vili scene writer
//!
//! [`pipeline`] strings the layers together, and the `obe-tiled` binary wraps it in
//! a command line.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use obe_tiled::prelude::*;
//!
//! let request = ConvertRequest::new("maps/level1.json", "scenes/level1.map.vili", ".");
//! if let Err(error) = obe_tiled::pipeline::run(&request) {
//!     tracing::error!("{error}");
//! }
//! ```

pub mod pipeline;

// Re-export sub-crates
pub use obe_tiled_assets as assets;
pub use obe_tiled_core as core;

#[cfg(feature = "vili")]
pub use obe_tiled_vili as vili;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assets::prelude::*;
    pub use crate::core::prelude::*;

    #[cfg(feature = "vili")]
    pub use crate::vili::{DumpError, DumpOptions, dump_scene, write_scene};

    pub use crate::pipeline::{ConvertError, ConvertRequest, OutputFormat};
}
