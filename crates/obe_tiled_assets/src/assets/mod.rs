//! Source-side document model.

pub mod layer;
pub mod map;
pub mod object;
pub mod properties;
pub mod tileset;
pub mod version;
