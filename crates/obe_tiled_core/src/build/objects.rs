//! Object classification and game object construction.

use obe_tiled_assets::prelude::{ObjectLayerData, Point, PropertyValue, TiledObject, TypeField};
use tracing::{debug, warn};

use crate::context::{ConvertContext, ObjectIdTable};
use crate::error::TransformError;
use crate::scene::{Collision, GameObject, KeyedMap, RequireValue, Scene, ScenePoint, Unit};

/// What a map object turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind<'a> {
    GameObject { object_type: &'a str },
    Collision,
    Ignored,
}

/// A non-empty type tag wins over a polygon; anything else is ignored.
pub fn classify_object(object: &TiledObject, type_field: TypeField) -> ObjectKind<'_> {
    if let Some(object_type) = object.type_tag(type_field) {
        ObjectKind::GameObject { object_type }
    } else if object.polygon.is_some() {
        ObjectKind::Collision
    } else {
        ObjectKind::Ignored
    }
}

/// Replace every `{index}` in `base_id` with `index`.
///
/// ```
/// # use obe_tiled_core::build::objects::make_object_id;
/// assert_eq!(make_object_id("enemy_{index}", 3), "enemy_3");
/// assert_eq!(make_object_id("boss", 3), "boss");
/// ```
pub fn make_object_id(base_id: &str, index: usize) -> String {
    base_id.replace("{index}", &index.to_string())
}

pub fn convert_object_layer(
    layer: &ObjectLayerData,
    context: &ConvertContext,
    scene: &mut Scene,
    object_ids: &mut ObjectIdTable,
) -> Result<(), TransformError> {
    for object in &layer.objects {
        match classify_object(object, context.type_field) {
            ObjectKind::GameObject { object_type } => {
                let key = make_object_id(&object.name, object_ids.len());
                let game_object = build_game_object(object, object_type, &key, object_ids)?;
                debug!("Game object '{}' of type {}", key, object_type);
                scene
                    .game_objects
                    .insert_unique("GameObjects", key.clone(), game_object)?;
                object_ids.record(object.id, key);
            }
            ObjectKind::Collision => {
                let key = collision_key(object);
                debug!("Collision '{}'", key);
                scene
                    .collisions
                    .insert_unique("Collisions", key, build_collision(object))?;
            }
            ObjectKind::Ignored => {}
        }
    }
    Ok(())
}

/// Game object with its geometry and custom properties under `Requires`.
///
/// `object`-typed properties are replaced by the key of the referenced game
/// object, which must already be in `object_ids`.
pub fn build_game_object(
    object: &TiledObject,
    object_type: &str,
    key: &str,
    object_ids: &ObjectIdTable,
) -> Result<GameObject, TransformError> {
    let mut requires = KeyedMap::new();
    requires.insert("x", RequireValue::Float(object.x));
    requires.insert("y", RequireValue::Float(object.y));
    requires.insert("width", RequireValue::Float(object.width));
    requires.insert("height", RequireValue::Float(object.height));
    requires.insert("rotation", RequireValue::Float(object.rotation));

    for property in &object.properties {
        let value = match &property.value {
            PropertyValue::Bool(b) => RequireValue::Bool(*b),
            PropertyValue::Int(i) => RequireValue::Int(*i),
            PropertyValue::Float(f) => RequireValue::Float(*f),
            PropertyValue::String(s) | PropertyValue::Color(s) | PropertyValue::File(s) => {
                RequireValue::String(s.clone())
            }
            PropertyValue::Object(id) => {
                let Some(referenced) = object_ids.resolve(*id) else {
                    return Err(TransformError::ForwardReference {
                        object_type: object_type.to_string(),
                        dependent: key.to_string(),
                        missing_id: *id,
                    });
                };
                RequireValue::String(referenced.to_string())
            }
            PropertyValue::Class { property_type, .. } => {
                warn!(
                    "Skipping class property '{}' ({}) on '{}'",
                    property.name,
                    property_type.as_deref().unwrap_or("unnamed class"),
                    key
                );
                continue;
            }
        };
        requires.insert(property.name.clone(), value);
    }

    Ok(GameObject {
        object_type: object_type.to_string(),
        requires,
        tile_id: None,
        id: None,
    })
}

/// Object name, or `collider_<id>` for unnamed objects.
pub fn collision_key(object: &TiledObject) -> String {
    if object.name.is_empty() {
        format!("collider_{}", object.id)
    } else {
        object.name.clone()
    }
}

pub fn build_collision(object: &TiledObject) -> Collision {
    Collision {
        points: object
            .polygon
            .as_deref()
            .map(|polygon| translate_polygon(object, polygon))
            .unwrap_or_default(),
        unit: Unit::ScenePixels,
    }
}

/// Polygon vertices moved from object-relative to absolute coordinates.
pub fn translate_polygon(object: &TiledObject, polygon: &[Point]) -> Vec<ScenePoint> {
    let (dx, dy) = (object.x, object.y);
    polygon
        .iter()
        .map(|point| ScenePoint::new(point.x + dx, point.y + dy))
        .collect()
}
