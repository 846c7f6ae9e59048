//! Layer walking dispatcher.

use obe_tiled_assets::prelude::{Layer, Properties, TileLayerData};
use tracing::{debug, warn};

use super::{images, objects};
use crate::context::{ConvertContext, ObjectIdTable};
use crate::error::TransformError;
use crate::properties::find_optional_property;
use crate::scene::{Scene, TileLayer};

/// Convert a single layer, recursing into groups.
///
/// # Z-Ordering
///
/// `z_counter` starts at the number of leaf layers and is decremented by every
/// tile layer that takes its z from it. A tile layer with a `layer` property uses
/// that value and leaves the counter alone, so siblings keep their positions.
pub fn walk_layer(
    layer: &Layer,
    context: &ConvertContext,
    scene: &mut Scene,
    object_ids: &mut ObjectIdTable,
    z_counter: &mut i64,
) -> Result<(), TransformError> {
    match layer {
        Layer::Tiles(tiles) => {
            let key = layer_key(&tiles.name);
            let tile_layer = build_tile_layer(tiles, z_counter)?;
            debug!("Tile layer '{}' at z {}", key, tile_layer.layer);
            scene
                .tiles
                .layers
                .insert_unique("Tiles.layers", key, tile_layer)?;
        }
        Layer::Objects(group) => {
            objects::convert_object_layer(group, context, scene, object_ids)?;
        }
        Layer::Image(image) => {
            images::convert_image_layer(image, context, &mut scene.sprites)?;
        }
        Layer::Group(group) => {
            for child in &group.layers {
                walk_layer(child, context, scene, object_ids, z_counter)?;
            }
        }
    }
    Ok(())
}

/// Scene key of a tile layer: its name with spaces replaced by underscores.
pub fn layer_key(name: &str) -> String {
    name.replace(' ', "_")
}

pub fn build_tile_layer(
    layer: &TileLayerData,
    z_counter: &mut i64,
) -> Result<TileLayer, TransformError> {
    let tiles = layer
        .data
        .clone()
        .ok_or_else(|| TransformError::MissingTileData {
            layer: layer.name.clone(),
        })?;

    let expected = layer.width as usize * layer.height as usize;
    if tiles.len() != expected {
        warn!(
            "Tile layer '{}' has {} tiles, expected {}x{}",
            layer.name,
            tiles.len(),
            layer.width,
            layer.height
        );
    }

    Ok(TileLayer {
        x: layer.x,
        y: layer.y,
        width: layer.width,
        height: layer.height,
        layer: layer_z(&layer.properties, &layer.name, z_counter)?,
        visible: layer.visible,
        opacity: layer.opacity,
        tiles,
    })
}

/// Explicit `layer` property, or the next default z.
fn layer_z(
    properties: &Properties,
    owner: &str,
    z_counter: &mut i64,
) -> Result<i64, TransformError> {
    if let Some(z) = find_optional_property::<i64>(properties, "layer", owner)? {
        return Ok(z);
    }
    let z = *z_counter;
    *z_counter -= 1;
    Ok(z)
}
