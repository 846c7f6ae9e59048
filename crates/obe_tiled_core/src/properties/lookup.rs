use obe_tiled_assets::prelude::Properties;

use super::FromTiledProperty;
use crate::error::TransformError;

/// Required property. `owner` names the layer or object in errors.
pub fn find_property<T: FromTiledProperty>(
    properties: &Properties,
    name: &str,
    owner: &str,
) -> Result<T, TransformError> {
    let value = find_optional_property(properties, name, owner)?;
    value.ok_or_else(|| TransformError::MissingProperty {
        name: name.to_string(),
        owner: owner.to_string(),
    })
}

/// Optional property. Absent is `Ok(None)`, present with the wrong type is an error.
pub fn find_optional_property<T: FromTiledProperty>(
    properties: &Properties,
    name: &str,
    owner: &str,
) -> Result<Option<T>, TransformError> {
    let Some(value) = properties.get(name) else {
        return Ok(None);
    };
    T::from_property(value)
        .map(Some)
        .ok_or_else(|| TransformError::PropertyType {
            name: name.to_string(),
            owner: owner.to_string(),
            expected: T::EXPECTED,
        })
}

/// Both or neither of a property pair.
pub fn find_property_pair<T: FromTiledProperty>(
    properties: &Properties,
    names: (&str, &str),
    owner: &str,
) -> Result<Option<(T, T)>, TransformError> {
    let first = find_optional_property::<T>(properties, names.0, owner)?;
    let second = find_optional_property::<T>(properties, names.1, owner)?;
    match (first, second) {
        (Some(first), Some(second)) => Ok(Some((first, second))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(unpaired(names.0, names.1, owner)),
        (None, Some(_)) => Err(unpaired(names.1, names.0, owner)),
    }
}

fn unpaired(present: &str, missing: &str, owner: &str) -> TransformError {
    TransformError::UnpairedProperty {
        present: present.to_string(),
        missing: missing.to_string(),
        owner: owner.to_string(),
    }
}
