//! Map to scene conversion.

pub mod images;
pub mod layers;
pub mod objects;
pub mod tilesets;

use obe_tiled_assets::prelude::{Layer, TiledMapAsset, TilesetSource};
use tracing::{debug, info};

use crate::config::ConvertConfig;
use crate::context::{ConvertContext, ObjectIdTable};
use crate::error::TransformError;
use crate::scene::{KeyedMap, Meta, Scene, Tiles, View, ViewPosition};

/// Convert a whole map. Any error aborts the conversion.
///
/// Layers are converted first, in source order, then the referenced tilesets
/// are loaded through `tileset_source` and flattened.
pub fn build_scene(
    map: &TiledMapAsset,
    config: &ConvertConfig,
    tileset_source: &dyn TilesetSource,
) -> Result<Scene, TransformError> {
    if map.infinite {
        return Err(TransformError::InfiniteMap);
    }

    let context = ConvertContext::new(config, map);
    info!(
        "Converting map version {} (object type from '{}')",
        map.version,
        context.type_field.field_name()
    );

    let mut scene = scene_skeleton(map, config);
    let mut object_ids = ObjectIdTable::new();
    let mut z_counter = Layer::leaf_count(&map.layers) as i64;

    for layer in &map.layers {
        layers::walk_layer(layer, &context, &mut scene, &mut object_ids, &mut z_counter)?;
    }

    for reference in &map.tilesets {
        let loaded = tileset_source.load_tileset(&config.map_dir, reference)?;
        let entry = tilesets::flatten_tileset(reference, &loaded, &context, &object_ids)?;
        scene
            .tiles
            .sources
            .insert_unique("Tiles.sources", reference.key(), entry)?;
    }

    debug!(
        "Scene '{}': {} tile layers, {} tilesets, {} sprites, {} collisions, {} game objects",
        scene.meta.name,
        scene.tiles.layers.len(),
        scene.tiles.sources.len(),
        scene.sprites.len(),
        scene.collisions.len(),
        scene.game_objects.len()
    );
    Ok(scene)
}

/// Scene with its header blocks filled in and every collection empty.
pub(crate) fn scene_skeleton(map: &TiledMapAsset, config: &ConvertConfig) -> Scene {
    let view = &config.view;
    Scene {
        meta: Meta {
            name: config.scene_name.clone(),
        },
        view: View {
            size: view.size,
            position: ViewPosition {
                x: view.x,
                y: view.y,
                unit: view.unit,
            },
            referential: view.referential,
        },
        tiles: Tiles {
            tile_width: map.tile_width,
            tile_height: map.tile_height,
            width: map.width,
            height: map.height,
            layers: KeyedMap::new(),
            sources: KeyedMap::new(),
        },
        sprites: KeyedMap::new(),
        collisions: KeyedMap::new(),
        game_objects: KeyedMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obe_tiled_assets::prelude::{
        LoadedTileset, TiledTilesetAsset, TilesetLoaderError, TilesetReference,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Tilesets keyed by reference source.
    #[derive(Default)]
    struct MemoryTilesets(HashMap<String, TiledTilesetAsset>);

    impl MemoryTilesets {
        fn with(mut self, source: &str, tileset: Value) -> Self {
            self.0
                .insert(source.to_string(), serde_json::from_value(tileset).unwrap());
            self
        }
    }

    impl TilesetSource for MemoryTilesets {
        fn load_tileset(
            &self,
            map_dir: &Path,
            reference: &TilesetReference,
        ) -> Result<LoadedTileset, TilesetLoaderError> {
            let path = map_dir.join(&reference.source);
            let Some(asset) = self.0.get(&reference.source).cloned() else {
                return Err(TilesetLoaderError::Io {
                    path,
                    source: io::Error::from(io::ErrorKind::NotFound),
                });
            };
            let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
            Ok(LoadedTileset {
                asset,
                path,
                directory,
            })
        }
    }

    fn config() -> ConvertConfig {
        ConvertConfig {
            scene_name: "level".to_string(),
            map_dir: PathBuf::from("/game/maps"),
            base_dir: PathBuf::from("/game"),
            ..ConvertConfig::default()
        }
    }

    fn terrain() -> Value {
        json!({
            "columns": 2, "tilecount": 4, "margin": 0, "spacing": 0,
            "tilewidth": 16, "tileheight": 16,
            "image": "terrain.png", "imagewidth": 32, "imageheight": 32
        })
    }

    fn map(layers: Value) -> TiledMapAsset {
        serde_json::from_value(json!({
            "version": "1.9", "tilewidth": 16, "tileheight": 16,
            "width": 2, "height": 1,
            "layers": layers,
            "tilesets": [{"firstgid": 1, "source": "terrain.tsx"}]
        }))
        .unwrap()
    }

    fn tile_layer(name: &str) -> Value {
        json!({"type": "tilelayer", "name": name, "width": 2, "height": 1, "data": [1, 2]})
    }

    #[test]
    fn test_layer_order_counts_down() {
        let map = map(json!([
            tile_layer("a"),
            {"type": "objectgroup", "name": "objects", "objects": []},
            tile_layer("b"),
            tile_layer("c")
        ]));
        let tilesets = MemoryTilesets::default().with("terrain.tsx", terrain());
        let scene = build_scene(&map, &config(), &tilesets).unwrap();

        let z: Vec<_> = scene
            .tiles
            .layers
            .iter()
            .map(|(key, layer)| (key, layer.layer))
            .collect();
        // Four leaf layers; only tile layers consume the counter
        assert_eq!(z, [("a", 4), ("b", 3), ("c", 2)]);
    }

    #[test]
    fn test_groups_are_flattened_in_order() {
        let map = map(json!([
            tile_layer("top"),
            {
                "type": "group", "name": "deco",
                "layers": [tile_layer("deco 1"), tile_layer("deco 2")]
            },
            tile_layer("bottom")
        ]));
        let tilesets = MemoryTilesets::default().with("terrain.tsx", terrain());
        let scene = build_scene(&map, &config(), &tilesets).unwrap();

        let z: Vec<_> = scene
            .tiles
            .layers
            .iter()
            .map(|(key, layer)| (key, layer.layer))
            .collect();
        assert_eq!(z, [("top", 4), ("deco_1", 3), ("deco_2", 2), ("bottom", 1)]);
    }

    #[test]
    fn test_duplicate_layer_keys_are_rejected() {
        let map = map(json!([tile_layer("back ground"), tile_layer("back_ground")]));
        let tilesets = MemoryTilesets::default().with("terrain.tsx", terrain());
        let err = build_scene(&map, &config(), &tilesets).unwrap_err();

        let TransformError::DuplicateKey { collection, key } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!((collection, key.as_str()), ("Tiles.layers", "back_ground"));
    }

    #[test]
    fn test_header_and_sources() {
        let map = map(json!([tile_layer("ground")]));
        let tilesets = MemoryTilesets::default().with("terrain.tsx", terrain());
        let scene = build_scene(&map, &config(), &tilesets).unwrap();

        assert_eq!(scene.meta.name, "level");
        assert_eq!(scene.tiles.width, 2);
        let source = scene.tiles.sources.get("terrain").unwrap();
        assert_eq!(source.first_tile_id, 1);
        assert_eq!(source.image.path, "maps/terrain.png");
    }

    #[test]
    fn test_missing_tileset_aborts() {
        let map = map(json!([]));
        let err = build_scene(&map, &config(), &MemoryTilesets::default()).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Tileset(TilesetLoaderError::Io { .. })
        ));
    }

    #[test]
    fn test_infinite_map_is_rejected() {
        let mut map = map(json!([]));
        map.infinite = true;
        let err = build_scene(&map, &config(), &MemoryTilesets::default()).unwrap_err();
        assert!(matches!(err, TransformError::InfiniteMap));
    }

    #[test]
    fn test_tileset_objects_see_all_map_objects() {
        let mut map = map(json!([
            {"type": "objectgroup", "name": "objects", "objects": [
                {"id": 10, "name": "hero", "class": "Player", "x": 0, "y": 0}
            ]}
        ]));
        map.tilesets[0].source = "props.tsx".to_string();
        let mut props = terrain();
        props["tiles"] = json!([{"id": 0, "objectgroup": {"objects": [
            {"id": 1, "name": "camera", "class": "Follow", "x": 0, "y": 0, "point": true,
             "properties": [{"name": "target", "type": "object", "value": 10}]}
        ]}}]);
        let tilesets = MemoryTilesets::default().with("props.tsx", props);
        let scene = build_scene(&map, &config(), &tilesets).unwrap();

        let source = scene.tiles.sources.get("props").unwrap();
        assert_eq!(source.objects[0].id.as_deref(), Some("camera"));
        assert_eq!(source.objects[0].tile_id, Some(1));
        assert!(scene.game_objects.contains_key("hero"));
    }
}
