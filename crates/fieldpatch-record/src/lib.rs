//! fieldpatch Record Layer
//!
//! Field descriptors, typed mutable slots and the [`Record`] trait.
//!
//! # Overview
//!
//! The record layer provides:
//! - **FieldMeta**: static per-field metadata (name, alias, settability)
//! - **Slot**: tagged variants over the semantic field kinds, replacing
//!   runtime type introspection with a single pattern match
//! - **Record**: the trait a patchable type implements to expose its
//!   ordered fields
//! - **UpdateError**: the two error kinds an update call can surface
//!
//! # Example
//!
//! ```rust
//! use fieldpatch_record::{Field, FieldMeta, IntSlot, Record, Slot, UpdateError};
//!
//! struct Counter {
//!     total: i64,
//! }
//!
//! impl Record for Counter {
//!     fn record_name(&self) -> &'static str {
//!         "Counter"
//!     }
//!
//!     fn fields_mut(&mut self) -> Result<Vec<Field<'_>>, UpdateError> {
//!         Ok(vec![Field::new(
//!             FieldMeta::new("Total"),
//!             Slot::Int(IntSlot::I64(&mut self.total)),
//!         )])
//!     }
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod meta;
pub mod record;
pub mod slot;

// Re-exports
pub use error::UpdateError;
pub use meta::{FieldMeta, KeySource, SkipRule};
pub use record::{Field, Record};
pub use slot::{FloatSlot, IntSlot, SeqSlot, Slot, UintSlot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
