//! # `obe_tiled_vili`
//!
//! Layer 3 of `obe_tiled`: writes a converted [`Scene`](obe_tiled_core::Scene)
//! as a vili document, the text format ObEngine reads scenes from.

pub mod options;
pub mod scene;
pub mod writer;

pub use options::DumpOptions;
pub use scene::{DumpError, dump_scene, write_scene};
pub use writer::dump;

#[cfg(test)]
mod tests {
    use super::*;
    use obe_tiled_core::prelude::*;

    fn scene() -> Scene {
        let mut layers = KeyedMap::new();
        layers.insert(
            "ground",
            TileLayer {
                x: 0,
                y: 0,
                width: 3,
                height: 2,
                layer: 1,
                visible: true,
                opacity: 1.0,
                tiles: vec![1, 2, 3, 4, 5, 6],
            },
        );
        let mut collisions = KeyedMap::new();
        collisions.insert(
            "collider_3",
            Collision {
                points: vec![ScenePoint::new(0.0, 0.0), ScenePoint::new(8.0, 0.0)],
                unit: Unit::ScenePixels,
            },
        );

        Scene {
            meta: Meta {
                name: "level".to_string(),
            },
            view: View {
                size: 1.0,
                position: ViewPosition {
                    x: 0.0,
                    y: 0.0,
                    unit: Unit::SceneUnits,
                },
                referential: Referential::TopLeft,
            },
            tiles: Tiles {
                tile_width: 16,
                tile_height: 16,
                width: 3,
                height: 2,
                layers,
                sources: KeyedMap::new(),
            },
            sprites: KeyedMap::new(),
            collisions,
            game_objects: KeyedMap::new(),
        }
    }

    #[test]
    fn test_dump_scene_layout() {
        let scene = scene();
        let text = dump_scene(&scene, &DumpOptions::for_scene(&scene)).unwrap();

        let expected = "\
Meta:
    name: \"level\"
View:
    size: 1.0
    position:
        x: 0.0
        y: 0.0
        unit: \"SceneUnits\"
    referential: \"TopLeft\"
Tiles:
    tileWidth: 16
    tileHeight: 16
    width: 3
    height: 2
    layers:
        ground:
            x: 0
            y: 0
            width: 3
            height: 2
            layer: 1
            visible: true
            opacity: 1.0
            tiles: [
                1, 2, 3,
                4, 5, 6
            ]
    sources: {}
Collisions:
    collider_3:
        points: [
            {
                x: 0.0,
                y: 0.0
            },
            {
                x: 8.0,
                y: 0.0
            }
        ]
        unit: \"ScenePixels\"
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_for_scene_uses_map_width() {
        let options = DumpOptions::for_scene(&scene());
        assert_eq!(options.array_items_per_line, 3);
        assert_eq!(options.object_items_per_line, 1);
        assert_eq!(options.indent, 4);
    }
}
