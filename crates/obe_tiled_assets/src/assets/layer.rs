//! Map layers, decided once by their `type` discriminator.

use serde::Deserialize;

use super::object::TiledObject;
use super::properties::Properties;

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Layer {
    #[serde(rename = "tilelayer")]
    Tiles(TileLayerData),
    #[serde(rename = "objectgroup")]
    Objects(ObjectLayerData),
    #[serde(rename = "imagelayer")]
    Image(ImageLayerData),
    #[serde(rename = "group")]
    Group(GroupLayerData),
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Layer::Tiles(layer) => &layer.name,
            Layer::Objects(layer) => &layer.name,
            Layer::Image(layer) => &layer.name,
            Layer::Group(layer) => &layer.name,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Layer::Tiles(layer) => &layer.properties,
            Layer::Objects(layer) => &layer.properties,
            Layer::Image(layer) => &layer.properties,
            Layer::Group(layer) => &layer.properties,
        }
    }

    /// Number of non-group layers, counting group children recursively.
    pub fn leaf_count(layers: &[Layer]) -> usize {
        layers
            .iter()
            .map(|layer| match layer {
                Layer::Group(group) => Layer::leaf_count(&group.layers),
                _ => 1,
            })
            .sum()
    }
}

/// Grid of global tile ids, row-major.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileLayerData {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Absent for infinite maps, which store chunks instead.
    #[serde(default)]
    pub data: Option<Vec<u32>>,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectLayerData {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub objects: Vec<TiledObject>,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageLayerData {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub image: String,
    /// Only written by newer editor versions.
    #[serde(default)]
    pub imagewidth: Option<f64>,
    #[serde(default)]
    pub imageheight: Option<f64>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupLayerData {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub properties: Properties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_on_type() {
        let layers: Vec<Layer> = serde_json::from_value(json!([
            {"type": "tilelayer", "name": "ground", "width": 2, "height": 1, "data": [1, 2]},
            {"type": "objectgroup", "name": "things", "objects": []},
            {"type": "imagelayer", "name": "sky", "image": "sky.png", "x": 3, "y": 4},
            {"type": "group", "name": "deco", "layers": [
                {"type": "tilelayer", "name": "a", "width": 1, "height": 1, "data": [0]},
                {"type": "tilelayer", "name": "b", "width": 1, "height": 1, "data": [0]}
            ]}
        ]))
        .unwrap();

        assert!(matches!(&layers[0], Layer::Tiles(t) if t.data == Some(vec![1, 2]) && t.visible));
        assert!(matches!(&layers[1], Layer::Objects(o) if o.objects.is_empty()));
        assert!(matches!(&layers[2], Layer::Image(i) if i.x == 3.0 && i.image == "sky.png"));
        assert_eq!(layers[3].name(), "deco");
        assert_eq!(Layer::leaf_count(&layers), 5);
    }

    #[test]
    fn test_unknown_layer_type_is_rejected() {
        let result: Result<Layer, _> =
            serde_json::from_value(json!({"type": "paint", "name": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_encoded_tile_data_is_rejected() {
        let result: Result<Layer, _> = serde_json::from_value(json!({
            "type": "tilelayer", "name": "x", "width": 1, "height": 1,
            "encoding": "base64", "data": "AAAAAA=="
        }));
        assert!(result.is_err());
    }
}
