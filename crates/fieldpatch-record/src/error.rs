//! Error types for partial updates
//!
//! An update call surfaces exactly two kinds of failure:
//! - the target itself cannot be updated ([`UpdateError::InvalidTarget`])
//! - a matched field accepted no coercion ([`UpdateError::FieldAssignment`])

use serde_json::Value;

/// Failure of one update call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    /// The target does not expose mutable, struct-backed fields.
    /// Raised once, before any field processing.
    #[error("update target must be a mutable struct-backed record")]
    InvalidTarget,

    /// A patch key matched a field but no coercion path applied.
    /// Raised on the first such field in declaration order.
    #[error("{record}.{field} cannot be assigned with value {value}")]
    FieldAssignment {
        /// Record type name
        record: &'static str,

        /// Declared field name
        field: &'static str,

        /// Textual form of the offending value, `"null"` for explicit null
        value: String,
    },
}

impl UpdateError {
    /// Build a [`UpdateError::FieldAssignment`] for a raw patch value
    #[must_use]
    pub fn assignment(record: &'static str, field: &'static str, raw: &Value) -> Self {
        Self::FieldAssignment {
            record,
            field,
            value: raw_text(raw),
        }
    }
}

/// Render a raw value the way the error message reports it:
/// strings unquoted, everything else as its JSON text.
fn raw_text(raw: &Value) -> String {
    match raw {
        Value::Null => "null".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
