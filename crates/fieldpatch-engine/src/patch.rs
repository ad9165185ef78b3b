//! Patch - the external key/value mapping
//!
//! Provides [`Patch`], a read-only mapping from external key to raw
//! dynamic value. How the mapping was produced (JSON body, form data)
//! is the caller's concern; the engine only looks keys up.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from external key to raw dynamic value
///
/// A key that is absent leaves its field untouched; a key present with
/// an explicit null requests the field be cleared, which only nullable
/// field shapes accept.
///
/// Serde-transparent, so a patch deserializes straight from a JSON
/// object:
///
/// ```
/// use fieldpatch_engine::Patch;
///
/// let patch: Patch = serde_json::from_str(r#"{"Score": 42}"#).unwrap();
/// assert!(patch.get("Score").is_some());
/// assert!(patch.get("ID").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(Map<String, Value>);

impl Patch {
    /// Empty patch; applying it is a no-op
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a JSON value, declining anything but an object
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Raw value for `key`, if present
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` is present (even with an explicit null)
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace an entry
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the patch holds no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Patch {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Patch {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
