//! Ordered map type for STAR mappings.
//!
//! [`StarMap`] wraps [`IndexMap`] so that keys keep their insertion order. In STAR
//! output that order is the order of the `_key value` lines of a key-value block,
//! and for a mapping of blocks the order of the `data_` sections.
//!
//! ## Examples
//!
//! ```rust
//! use serde_star::{StarMap, Value};
//!
//! let mut map = StarMap::new();
//! map.insert("rlnImageSize".to_string(), Value::from(256));
//! map.insert("rlnOpticsGroupName".to_string(), Value::from("opticsGroup1"));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["rlnImageSize", "rlnOpticsGroupName"]);
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An ordered map of string keys to input values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StarMap(IndexMap<String, Value>);

impl StarMap {
    #[must_use]
    pub fn new() -> Self {
        StarMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        StarMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for StarMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StarMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for StarMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        StarMap(IndexMap::from_iter(iter))
    }
}
