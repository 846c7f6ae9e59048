use obe_tiled_core::Scene;

/// Layout of the written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Values per row in arrays.
    pub array_items_per_line: usize,
    /// Entries per row in objects written inline.
    pub object_items_per_line: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            array_items_per_line: 16,
            object_items_per_line: 1,
        }
    }
}

impl DumpOptions {
    /// One map row of tiles per line.
    pub fn for_scene(scene: &Scene) -> Self {
        Self {
            array_items_per_line: scene.tiles.width as usize,
            object_items_per_line: 1,
            ..Self::default()
        }
    }
}
