//! Typed access to custom properties.

mod deserialize;
mod lookup;

pub use deserialize::FromTiledProperty;
pub use lookup::{find_optional_property, find_property, find_property_pair};
