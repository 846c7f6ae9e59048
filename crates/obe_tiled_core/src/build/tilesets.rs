//! Tileset flattening.

use obe_tiled_assets::prelude::{LoadedTileset, TileData, TiledObject, TilesetReference};
use tracing::debug;

use super::objects::{build_game_object, translate_polygon};
use crate::context::{ConvertContext, ObjectIdTable};
use crate::error::TransformError;
use crate::paths::resolve_asset_path;
use crate::properties::find_optional_property;
use crate::scene::{
    AnimatedTile, AnimationFrame, GameObject, ScenePoint, Size, TileCollision, TilesetEntry,
    TilesetImage, Unit,
};

/// Build the `Tiles.sources` entry of one referenced tileset.
///
/// Point objects in tile collision groups resolve `object` properties against
/// `object_ids`, which holds every map object at this point.
pub fn flatten_tileset(
    reference: &TilesetReference,
    loaded: &LoadedTileset,
    context: &ConvertContext,
    object_ids: &ObjectIdTable,
) -> Result<TilesetEntry, TransformError> {
    let tileset = &loaded.asset;
    let path = resolve_asset_path(&loaded.directory, &tileset.image, &context.config.base_dir)?;

    let mut entry = TilesetEntry {
        first_tile_id: reference.first_gid,
        columns: tileset.columns,
        tile_count: tileset.tile_count,
        margin: tileset.margin,
        spacing: tileset.spacing,
        tile: Size {
            width: tileset.tile_width,
            height: tileset.tile_height,
        },
        image: TilesetImage {
            width: tileset.image_width,
            height: tileset.image_height,
            path,
        },
        animations: Vec::new(),
        collisions: Vec::new(),
        objects: Vec::new(),
    };

    for tile in &tileset.tiles {
        if let Some(animation) = animated_tile(tile) {
            entry.animations.push(animation);
        }
        let Some(group) = &tile.object_group else {
            continue;
        };
        for object in &group.objects {
            match classify_tile_object(object) {
                TileObjectKind::Collision => {
                    entry.collisions.push(tile_collision(tile.id, object)?);
                }
                TileObjectKind::Point => {
                    let game_object =
                        tile_point_object(object, reference.first_gid, context, object_ids)?;
                    entry.objects.push(game_object);
                }
                TileObjectKind::Ignored => {
                    debug!("Ignoring object {} of tile {}", object.id, tile.id);
                }
            }
        }
    }

    debug!(
        "Tileset '{}': {} animations, {} collisions, {} objects",
        reference.key(),
        entry.animations.len(),
        entry.collisions.len(),
        entry.objects.len()
    );
    Ok(entry)
}

/// What an object inside a tile's object group becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileObjectKind {
    /// Polygons, and shapes without a `point` flag.
    Collision,
    /// `point: true` without a polygon.
    Point,
    /// `point: false` without a polygon.
    Ignored,
}

pub fn classify_tile_object(object: &TiledObject) -> TileObjectKind {
    if object.polygon.is_some() || object.point.is_none() {
        TileObjectKind::Collision
    } else if object.is_point() {
        TileObjectKind::Point
    } else {
        TileObjectKind::Ignored
    }
}

fn animated_tile(tile: &TileData) -> Option<AnimatedTile> {
    let frames = tile.animation.as_ref()?;
    Some(AnimatedTile {
        id: tile.id,
        frames: frames
            .iter()
            .map(|frame| AnimationFrame {
                clock: frame.duration,
                tileid: frame.tile_id,
            })
            .collect(),
    })
}

/// Collision shape of a tile. Without a polygon the bounding rectangle is used.
pub fn tile_collision(tile_id: u32, object: &TiledObject) -> Result<TileCollision, TransformError> {
    let points = match &object.polygon {
        Some(polygon) => translate_polygon(object, polygon),
        None => rect_corners(object.x, object.y, object.width, object.height),
    };
    let owner = format!("tile {tile_id} collision {}", object.id);

    Ok(TileCollision {
        id: tile_id,
        points,
        tag: find_optional_property::<String>(&object.properties, "tag", &owner)?,
        unit: Unit::ScenePixels,
    })
}

/// Corners of a rectangle starting at its origin: top-left, top-right,
/// bottom-right, bottom-left.
pub fn rect_corners(x: f64, y: f64, width: f64, height: f64) -> Vec<ScenePoint> {
    vec![
        ScenePoint::new(x, y),
        ScenePoint::new(x + width, y),
        ScenePoint::new(x + width, y + height),
        ScenePoint::new(x, y + height),
    ]
}

fn tile_point_object(
    object: &TiledObject,
    first_gid: u32,
    context: &ConvertContext,
    object_ids: &ObjectIdTable,
) -> Result<GameObject, TransformError> {
    let object_type = object
        .type_tag(context.type_field)
        .ok_or_else(|| TransformError::MissingProperty {
            name: context.type_field.field_name().to_string(),
            owner: format!("tile point object '{}'", object.name),
        })?;
    let tile_id = object
        .id
        .checked_add(first_gid.saturating_sub(1))
        .ok_or_else(|| TransformError::TileIdOverflow {
            object_id: object.id,
            first_gid,
        })?;

    let mut game_object = build_game_object(object, object_type, &object.name, object_ids)?;
    game_object.tile_id = Some(tile_id);
    game_object.id = Some(object.name.clone());
    Ok(game_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConvertConfig;
    use crate::scene::RequireValue;
    use obe_tiled_assets::prelude::{TiledMapAsset, TiledTilesetAsset};
    use serde_json::{Value, json};
    use std::path::PathBuf;

    fn map() -> TiledMapAsset {
        serde_json::from_value(json!({
            "version": "1.9", "tilewidth": 16, "tileheight": 16,
            "width": 1, "height": 1, "layers": [], "tilesets": []
        }))
        .unwrap()
    }

    fn loaded(tiles: Value) -> LoadedTileset {
        let asset: TiledTilesetAsset = serde_json::from_value(json!({
            "columns": 8, "tilecount": 64, "margin": 0, "spacing": 1,
            "tilewidth": 16, "tileheight": 16,
            "image": "../images/terrain.png", "imagewidth": 128, "imageheight": 136,
            "tiles": tiles
        }))
        .unwrap();
        LoadedTileset {
            asset,
            path: PathBuf::from("/game/tilesets/terrain.json"),
            directory: PathBuf::from("/game/tilesets"),
        }
    }

    fn reference() -> TilesetReference {
        TilesetReference {
            first_gid: 65,
            source: "../tilesets/terrain.tsx".to_string(),
        }
    }

    fn config() -> ConvertConfig {
        ConvertConfig {
            base_dir: PathBuf::from("/game"),
            ..ConvertConfig::default()
        }
    }

    fn flatten(tiles: Value, ids: &ObjectIdTable) -> Result<TilesetEntry, TransformError> {
        let map = map();
        let config = config();
        let context = ConvertContext::new(&config, &map);
        flatten_tileset(&reference(), &loaded(tiles), &context, ids)
    }

    #[test]
    fn test_metrics_and_image_path() {
        let entry = flatten(json!([]), &ObjectIdTable::new()).unwrap();

        assert_eq!(entry.first_tile_id, 65);
        assert_eq!(
            entry.tile,
            Size {
                width: 16,
                height: 16
            }
        );
        assert_eq!(entry.image.path, "images/terrain.png");
        assert_eq!(entry.image.height, 136);

        // Empty sub-collections are left out
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("animations"));
        assert!(!object.contains_key("collisions"));
        assert!(!object.contains_key("objects"));
    }

    #[test]
    fn test_rect_corners() {
        assert_eq!(
            rect_corners(2.0, 3.0, 4.0, 5.0),
            vec![
                ScenePoint::new(2.0, 3.0),
                ScenePoint::new(6.0, 3.0),
                ScenePoint::new(6.0, 8.0),
                ScenePoint::new(2.0, 8.0)
            ]
        );
    }

    #[test]
    fn test_animation_frames_in_order() {
        let tiles = json!([{"id": 5, "animation": [
            {"tileid": 5, "duration": 200},
            {"tileid": 6, "duration": 100},
            {"tileid": 5, "duration": 50}
        ]}]);
        let entry = flatten(tiles, &ObjectIdTable::new()).unwrap();

        assert_eq!(entry.animations.len(), 1);
        assert_eq!(entry.animations[0].id, 5);
        let frames: Vec<_> = entry.animations[0]
            .frames
            .iter()
            .map(|frame| (frame.clock, frame.tileid))
            .collect();
        assert_eq!(frames, [(200, 5), (100, 6), (50, 5)]);
    }

    #[test]
    fn test_every_tile_object_is_handled() {
        let tiles = json!([{"id": 9, "objectgroup": {"objects": [
            {"id": 1, "x": 2, "y": 3, "width": 4, "height": 5,
             "properties": [{"name": "tag", "type": "string", "value": "ground"}]},
            {"id": 2, "x": 1, "y": 1,
             "polygon": [{"x": 0, "y": 0}, {"x": 2, "y": 0}, {"x": 0, "y": 2}]},
            {"id": 3, "name": "spawn", "class": "Spawner", "x": 8, "y": 8, "point": true,
             "properties": [{"name": "rate", "type": "float", "value": 0.5}]},
            {"id": 4, "x": 0, "y": 0, "point": false},
            {"id": 5, "x": 4, "y": 4, "point": true,
             "polygon": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 0, "y": 1}]}
        ]}}]);
        let entry = flatten(tiles, &ObjectIdTable::new()).unwrap();

        // The `point: false` shape is dropped, the flagged polygon stays a collision
        assert_eq!(entry.collisions.len(), 3);
        let rect = &entry.collisions[0];
        assert_eq!(rect.id, 9);
        assert_eq!(rect.tag.as_deref(), Some("ground"));
        assert_eq!(rect.points, rect_corners(2.0, 3.0, 4.0, 5.0));
        assert_eq!(entry.collisions[1].points[2], ScenePoint::new(1.0, 3.0));
        assert_eq!(entry.collisions[1].tag, None);
        assert_eq!(entry.collisions[2].points[0], ScenePoint::new(4.0, 4.0));

        assert_eq!(entry.objects.len(), 1);
        let spawner = &entry.objects[0];
        assert_eq!(spawner.object_type, "Spawner");
        assert_eq!(spawner.tile_id, Some(3 + 65 - 1));
        assert_eq!(spawner.id.as_deref(), Some("spawn"));
        assert_eq!(
            spawner.requires.get("rate"),
            Some(&RequireValue::Float(0.5))
        );
    }

    #[test]
    fn test_classify_tile_object() {
        let kind = |value: Value| classify_tile_object(&serde_json::from_value(value).unwrap());
        let triangle = json!([{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 0, "y": 1}]);

        assert_eq!(
            kind(json!({"id": 1, "x": 0, "y": 0})),
            TileObjectKind::Collision
        );
        assert_eq!(
            kind(json!({"id": 2, "x": 0, "y": 0, "polygon": triangle.clone()})),
            TileObjectKind::Collision
        );
        assert_eq!(
            kind(json!({"id": 3, "x": 0, "y": 0, "point": true, "polygon": triangle})),
            TileObjectKind::Collision
        );
        assert_eq!(
            kind(json!({"id": 4, "x": 0, "y": 0, "point": true})),
            TileObjectKind::Point
        );
        assert_eq!(
            kind(json!({"id": 5, "x": 0, "y": 0, "point": false})),
            TileObjectKind::Ignored
        );
    }

    #[test]
    fn test_point_object_tile_id_overflow() {
        let tiles = json!([{"id": 0, "objectgroup": {"objects": [
            {"id": u32::MAX, "name": "far", "class": "Marker", "x": 0, "y": 0, "point": true}
        ]}}]);

        let err = flatten(tiles, &ObjectIdTable::new()).unwrap_err();
        assert!(matches!(
            err,
            TransformError::TileIdOverflow {
                object_id: u32::MAX,
                first_gid: 65
            }
        ));
    }

    #[test]
    fn test_point_object_resolves_map_objects() {
        let tiles = json!([{"id": 0, "objectgroup": {"objects": [
            {"id": 1, "name": "turret", "class": "Turret", "x": 0, "y": 0, "point": true,
             "properties": [{"name": "target", "type": "object", "value": 42}]}
        ]}}]);

        let err = flatten(tiles.clone(), &ObjectIdTable::new()).unwrap_err();
        assert!(matches!(
            err,
            TransformError::ForwardReference { missing_id: 42, .. }
        ));

        let mut ids = ObjectIdTable::new();
        ids.record(42, "player");
        let entry = flatten(tiles, &ids).unwrap();
        assert_eq!(
            entry.objects[0].requires.get("target"),
            Some(&RequireValue::String("player".to_string()))
        );
    }
}
