//! In-memory image metadata.
//!
//! Metadata is a flat map from string keys to typed values. Keys are unique
//! and their order carries no meaning. Decoders populate it (see
//! [`crate::decode`]); operators read and prune it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical key holding the EXIF orientation code (1-8).
pub const ORIENTATION: &str = "Orientation";

/// A typed metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Double(f64),
    /// Text value.
    String(String),
    /// Opaque binary payload (e.g. an ICC profile).
    Blob(Vec<u8>),
}

impl MetadataValue {
    /// Read the value as an integer.
    ///
    /// Finite doubles are truncated toward zero. Text, blobs, NaN and
    /// infinities are not readable.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetadataValue::Int(v) => Some(*v),
            MetadataValue::Double(v) if v.is_finite() => Some(v.trunc() as i64),
            _ => None,
        }
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Int(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Double(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<Vec<u8>> for MetadataValue {
    fn from(value: Vec<u8>) -> Self {
        MetadataValue::Blob(value)
    }
}

/// Metadata attached to an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: HashMap<String, MetadataValue>,
}

impl Metadata {
    /// Create an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an integer field. Returns `None` if the key is absent or the
    /// value can't be read as an integer (see [`MetadataValue::as_int`]).
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.entries.get(key).and_then(MetadataValue::as_int)
    }

    /// Look up a field of any type.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Check whether a field exists, regardless of its type.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a field, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<MetadataValue> {
        self.entries.remove(key)
    }

    /// Iterate over every entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over every key.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
