//! Property deserialization helpers.
//!
//! Provides the `FromTiledProperty` trait for converting a decoded
//! [`PropertyValue`] to Rust types.

use obe_tiled_assets::prelude::PropertyValue;

/// Trait for types that can be read from a Tiled custom property.
///
/// # Example
///
/// ```
/// use obe_tiled_assets::prelude::PropertyValue;
/// use obe_tiled_core::properties::FromTiledProperty;
///
/// let prop = PropertyValue::Int(3);
/// assert_eq!(f64::from_property(&prop), Some(3.0));
/// assert_eq!(bool::from_property(&prop), None);
/// ```
pub trait FromTiledProperty: Sized {
    /// Type name used in error messages.
    const EXPECTED: &'static str;

    /// Returns `Some(value)` if conversion succeeds, `None` otherwise.
    fn from_property(value: &PropertyValue) -> Option<Self>;
}

impl FromTiledProperty for bool {
    const EXPECTED: &'static str = "bool";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromTiledProperty for i64 {
    const EXPECTED: &'static str = "int";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromTiledProperty for u32 {
    const EXPECTED: &'static str = "non-negative int";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(i) => u32::try_from(*i).ok(),
            _ => None,
        }
    }
}

impl FromTiledProperty for f64 {
    const EXPECTED: &'static str = "float";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Float(f) => Some(*f),
            PropertyValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl FromTiledProperty for String {
    const EXPECTED: &'static str = "string";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::String(s) | PropertyValue::Color(s) | PropertyValue::File(s) => {
                Some(s.clone())
            }
            _ => None,
        }
    }
}
