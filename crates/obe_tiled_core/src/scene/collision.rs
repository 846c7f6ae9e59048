use serde::Serialize;

use super::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Free-standing polygon, absolute map pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collision {
    pub points: Vec<ScenePoint>,
    pub unit: Unit,
}
