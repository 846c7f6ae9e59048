use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub rect: Rect,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Names of the engine's position transformers for each axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transform {
    pub x: String,
    pub y: String,
}
