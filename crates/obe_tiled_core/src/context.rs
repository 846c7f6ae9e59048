//! Per-run conversion state.

use std::collections::HashMap;

use obe_tiled_assets::prelude::{TiledMapAsset, TypeField};

use crate::config::ConvertConfig;

/// Read-only context shared by every build step of one run.
pub struct ConvertContext<'a> {
    pub config: &'a ConvertConfig,

    /// Which object field carries the type tag, from the map's version.
    pub type_field: TypeField,
}

impl<'a> ConvertContext<'a> {
    pub fn new(config: &'a ConvertConfig, map: &TiledMapAsset) -> Self {
        Self {
            config,
            type_field: map.version.type_field(),
        }
    }
}

/// Source object id to scene game object key, in conversion order.
///
/// Append-only for the duration of a run. A lookup miss means the referenced
/// object has not been converted yet.
#[derive(Debug, Default)]
pub struct ObjectIdTable {
    keys: HashMap<u32, String>,
}

impl ObjectIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, source_id: u32, key: impl Into<String>) {
        self.keys.insert(source_id, key.into());
    }

    pub fn resolve(&self, source_id: u32) -> Option<&str> {
        self.keys.get(&source_id).map(String::as_str)
    }

    /// Number of game objects converted so far.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
