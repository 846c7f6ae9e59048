use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::TransformError;

/// String-keyed map that keeps insertion order.
///
/// Serializes as a map in insertion order, which is the order entries are
/// processed in by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for KeyedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> KeyedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Insert, failing with [`TransformError::DuplicateKey`] if `key` is taken.
    pub fn insert_unique(
        &mut self,
        collection: &'static str,
        key: impl Into<String>,
        value: V,
    ) -> Result<(), TransformError> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(TransformError::DuplicateKey { collection, key });
        }
        self.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Serialize> Serialize for KeyedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
