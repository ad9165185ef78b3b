//! Nullable - validity-flagged value wrapper
//!
//! Provides [`Nullable`] for fields that must distinguish "explicitly
//! cleared" from "present with value". A patch key that is absent
//! leaves the field untouched; a key carrying an explicit null flips
//! the wrapper to its invalid state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Validity-flagged wrapper around a payload value
///
/// Models the SQL-style null pair: a validity flag plus a payload.
/// Unlike a pointer-shaped `Option` field, a `Nullable` field declares
/// up front that "cleared" is a first-class state the patch engine may
/// write, and it serializes as JSON null when invalid.
///
/// # Example
/// ```
/// use fieldpatch_value::Nullable;
///
/// let mut score = Nullable::some(42.0_f64);
/// assert_eq!(score.value(), Some(&42.0));
///
/// score = Nullable::none();
/// assert!(!score.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nullable<T> {
    inner: Option<T>,
}

impl<T> Nullable<T> {
    /// Create a valid wrapper holding `value`
    #[inline]
    #[must_use]
    pub fn some(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Create an invalid (cleared) wrapper
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self { inner: None }
    }

    /// Whether the wrapper currently holds a value
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Payload reference, if valid
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Consume into a plain `Option`
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    /// Replace the payload, marking the wrapper valid
    #[inline]
    pub fn set(&mut self, value: T) {
        self.inner = Some(value);
    }

    /// Clear the wrapper to its invalid state
    #[inline]
    pub fn clear(&mut self) {
        self.inner = None;
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.inner {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn some_is_valid() {
        let n = Nullable::some(7_i64);
        assert!(n.is_valid());
        assert_eq!(n.value(), Some(&7));
    }

    #[test]
    fn none_is_invalid() {
        let n: Nullable<String> = Nullable::none();
        assert!(!n.is_valid());
        assert_eq!(n.value(), None);
    }

    #[test]
    fn default_is_invalid() {
        let n: Nullable<bool> = Nullable::default();
        assert!(!n.is_valid());
    }

    #[test]
    fn set_and_clear() {
        let mut n = Nullable::none();
        n.set("hello".to_string());
        assert!(n.is_valid());

        n.clear();
        assert!(!n.is_valid());
    }

    #[test]
    fn from_option_round_trip() {
        let n: Nullable<i64> = Some(3).into();
        assert_eq!(n.into_option(), Some(3));

        let n: Nullable<i64> = None.into();
        assert_eq!(n.into_option(), None);
    }

    #[test]
    fn serializes_invalid_as_null() {
        let n: Nullable<f64> = Nullable::none();
        assert_eq!(serde_json::to_string(&n).unwrap(), "null");

        let n = Nullable::some(1.5_f64);
        assert_eq!(serde_json::to_string(&n).unwrap(), "1.5");
    }

    #[test]
    fn deserializes_null_as_invalid() {
        let n: Nullable<i64> = serde_json::from_str("null").unwrap();
        assert!(!n.is_valid());

        let n: Nullable<i64> = serde_json::from_str("12").unwrap();
        assert_eq!(n.value(), Some(&12));
    }
}
