//! fieldpatch Engine
//!
//! Partial, type-directed updates of structured records from untyped
//! key/value data.
//!
//! # Overview
//!
//! The engine applies a [`Patch`] (external key → raw JSON value) onto
//! any type implementing [`Record`], touching only the fields whose
//! keys the patch carries. Each matched value is coerced to the field's
//! declared kind by an ordered [`Updater`] chain; the first rule that
//! applies wins, and a field nothing applies to fails the call with a
//! descriptive error.
//!
//! # Example
//!
//! ```rust
//! use fieldpatch_engine::prelude::*;
//!
//! #[derive(Default)]
//! struct User {
//!     id: i64,
//!     nickname: Option<String>,
//!     score: Nullable<f64>,
//! }
//!
//! impl Record for User {
//!     fn record_name(&self) -> &'static str {
//!         "User"
//!     }
//!
//!     fn fields_mut(&mut self) -> Result<Vec<Field<'_>>, UpdateError> {
//!         Ok(vec![
//!             Field::new(FieldMeta::new("ID"), Slot::Int(IntSlot::I64(&mut self.id))),
//!             Field::new(FieldMeta::new("Nickname"), Slot::OptStr(&mut self.nickname)),
//!             Field::new(FieldMeta::new("Score"), Slot::NullableFloat(&mut self.score)),
//!         ])
//!     }
//! }
//!
//! let mut user = User::default();
//! let patch: Patch = serde_json::from_str(r#"{"Nickname": null, "Score": 42}"#).unwrap();
//!
//! let updated = update_with_defaults(&mut user, &patch).unwrap();
//! assert_eq!(updated, ["Nickname", "Score"]);
//! assert_eq!(user.nickname, None);
//! assert_eq!(user.score, Nullable::some(42.0));
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod patch;
pub mod seq;
pub mod updaters;

// Re-exports
pub use engine::{update, update_with_defaults};
pub use patch::Patch;
pub use seq::update_sequence;
pub use updaters::{Updater, DEFAULT_UPDATERS, SCALAR_UPDATERS};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for partial updates
    pub use crate::{
        update, update_sequence, update_with_defaults, Patch, Updater, DEFAULT_UPDATERS,
        SCALAR_UPDATERS,
    };
    pub use fieldpatch_record::{
        Field, FieldMeta, FloatSlot, IntSlot, KeySource, Record, SeqSlot, SkipRule, Slot,
        UintSlot, UpdateError,
    };
    pub use fieldpatch_value::Nullable;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
