//! Field metadata and key naming
//!
//! Provides [`FieldMeta`] descriptors, the [`KeySource`] naming
//! convention and the [`SkipRule`] predicate type.

/// Static metadata describing one updatable field
///
/// A descriptor carries everything the resolver needs to decide
/// eligibility before touching the field's storage: the declared name,
/// an optional external alias, and whether the field may be written at
/// all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldMeta {
    /// Declared field name, reported in results and errors
    pub name: &'static str,

    /// External alias used under [`KeySource::Alias`]
    pub alias: Option<&'static str>,

    /// Whether the field accepts updates at all
    pub settable: bool,
}

impl FieldMeta {
    /// Create a settable descriptor with no alias
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            settable: true,
        }
    }

    /// Attach an external alias
    #[inline]
    #[must_use]
    pub const fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Mark the field read-only; the resolver bypasses it entirely
    #[inline]
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.settable = false;
        self
    }
}

/// How a field descriptor maps to an external patch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeySource {
    /// The field's own declared name is the patch key
    #[default]
    FieldName,

    /// The declared alias is the patch key; fields without an alias
    /// have no external key and are never matched
    Alias,
}

impl KeySource {
    /// Resolve the external key for a descriptor
    #[inline]
    #[must_use]
    pub fn key_of(self, meta: &FieldMeta) -> Option<&'static str> {
        match self {
            Self::FieldName => Some(meta.name),
            Self::Alias => meta.alias,
        }
    }
}

/// Predicate excluding a field from update consideration
///
/// Evaluated before any coercion is attempted; a firing skip rule
/// bypasses the field even when the patch holds a matching key.
pub type SkipRule = fn(&FieldMeta) -> bool;
