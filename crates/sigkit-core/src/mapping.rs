//! Key/value mapping containers
//!
//! Provides string-keyed containers over heterogeneous JSON-style values:
//! - [`AttrMap`]: mutable container with typed getters and setters
//! - [`ReadonlyMap`]: the same read surface with no mutating methods
//!
//! Keys iterate in sorted order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::ops::Index;

/// A mutable string-keyed container of heterogeneous values
///
/// ```rust,ignore
/// let mut map = AttrMap::new();
/// map.set("one", 1);
/// assert_eq!(map.get_i64("one"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap {
    entries: BTreeMap<String, Value>,
}

impl AttrMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous value under the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get the raw value under a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Get an integer value
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.entries.get(key).and_then(Value::as_i64)
    }

    /// Get a floating-point value
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.entries.get(key).and_then(Value::as_f64)
    }

    /// Get a boolean value
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(Value::as_bool)
    }

    /// Remove a key, returning its value if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Index<&str> for AttrMap {
    type Output = Value;

    /// Panics if the key is absent; use [`AttrMap::get`] for a fallible
    /// lookup.
    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

/// A read-only string-keyed container of heterogeneous values
///
/// Built once from an [`AttrMap`] or an iterator of entries; after
/// construction only the read surface exists, so immutability is enforced
/// at compile time rather than by a runtime check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReadonlyMap {
    entries: BTreeMap<String, Value>,
}

impl ReadonlyMap {
    /// Get the raw value under a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Get an integer value
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.entries.get(key).and_then(Value::as_i64)
    }

    /// Get a floating-point value
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.entries.get(key).and_then(Value::as_f64)
    }

    /// Get a boolean value
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(Value::as_bool)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl From<AttrMap> for ReadonlyMap {
    fn from(map: AttrMap) -> Self {
        Self {
            entries: map.entries,
        }
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for ReadonlyMap {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Index<&str> for ReadonlyMap {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}
