//! Image layers and sprite repetition.

use obe_tiled_assets::prelude::ImageLayerData;
use tracing::{debug, warn};

use crate::context::ConvertContext;
use crate::error::TransformError;
use crate::paths::resolve_asset_path;
use crate::properties::{find_optional_property, find_property_pair};
use crate::scene::{KeyedMap, Rect, Sprite, Transform};

/// Upper bound on the copies a single image layer may repeat into.
pub const MAX_REPEAT_COPIES: u64 = 1 << 16;

pub fn convert_image_layer(
    layer: &ImageLayerData,
    context: &ConvertContext,
    sprites: &mut KeyedMap<Sprite>,
) -> Result<(), TransformError> {
    if layer.image.is_empty() {
        warn!("Image layer '{}' has no image, skipping", layer.name);
        return Ok(());
    }

    let sprite = build_sprite(layer, context)?;
    let repeat =
        find_property_pair::<u32>(&layer.properties, ("repeat_x", "repeat_y"), &layer.name)?;

    if let Some((repeat_x, repeat_y)) = repeat {
        if u64::from(repeat_x) * u64::from(repeat_y) > MAX_REPEAT_COPIES {
            return Err(TransformError::TooManyRepeats {
                layer: layer.name.clone(),
                repeat_x,
                repeat_y,
                max: MAX_REPEAT_COPIES,
            });
        }
        debug!("Repeating sprite '{}' {}x{}", layer.name, repeat_x, repeat_y);
        for (key, copy) in repeat_sprites(&layer.name, &sprite, repeat_x, repeat_y) {
            sprites.insert_unique("Sprites", key, copy)?;
        }
    }
    sprites.insert_unique("Sprites", layer.name.clone(), sprite)
}

/// Sprite for an image layer, before repetition.
pub fn build_sprite(
    layer: &ImageLayerData,
    context: &ConvertContext,
) -> Result<Sprite, TransformError> {
    let properties = &layer.properties;
    let owner = layer.name.as_str();

    let width = find_optional_property::<f64>(properties, "width", owner)?
        .or(layer.imagewidth)
        .ok_or_else(|| missing("width", owner))?;
    let height = find_optional_property::<f64>(properties, "height", owner)?
        .or(layer.imageheight)
        .ok_or_else(|| missing("height", owner))?;

    let config = context.config;
    let path = resolve_asset_path(&config.map_dir, &layer.image, &config.base_dir)?;

    let transform = find_property_pair::<String>(properties, ("xTransform", "yTransform"), owner)?
        .map(|(x, y)| Transform { x, y });

    Ok(Sprite {
        rect: Rect {
            x: layer.x,
            y: layer.y,
            width,
            height,
        },
        path,
        transform,
        layer: find_optional_property::<i64>(properties, "layer", owner)?,
    })
}

fn missing(name: &str, owner: &str) -> TransformError {
    TransformError::MissingProperty {
        name: name.to_string(),
        owner: owner.to_string(),
    }
}

/// `repeat_x * repeat_y` copies of `base`, keyed `<base_id>_1..`.
///
/// Columns are the outer loop: the first `repeat_y` copies share the base x.
pub fn repeat_sprites(
    base_id: &str,
    base: &Sprite,
    repeat_x: u32,
    repeat_y: u32,
) -> Vec<(String, Sprite)> {
    let count = u64::from(repeat_x) * u64::from(repeat_y);
    let capacity = usize::try_from(count.min(MAX_REPEAT_COPIES)).unwrap_or_default();
    let mut copies = Vec::with_capacity(capacity);
    let mut n = 1;
    for x in 0..repeat_x {
        for y in 0..repeat_y {
            let mut copy = base.clone();
            copy.rect.x = base.rect.x + base.rect.width * f64::from(x);
            copy.rect.y = base.rect.y + base.rect.height * f64::from(y);
            copies.push((format!("{base_id}_{n}"), copy));
            n += 1;
        }
    }
    copies
}
