//! fieldpatch Value Layer
//!
//! Shared value primitives for the fieldpatch workspace.
//!
//! # Overview
//!
//! The value layer provides:
//! - **Nullable**: a validity-flagged wrapper distinguishing "present
//!   with value" from "explicitly absent"
//! - **num**: checked conversions from untyped JSON numbers into the
//!   integer, unsigned and floating-point families
//!
//! # Example
//!
//! ```rust
//! use fieldpatch_value::Nullable;
//!
//! let score: Nullable<f64> = Nullable::some(42.0);
//! assert!(score.is_valid());
//!
//! let cleared: Nullable<f64> = Nullable::none();
//! assert_eq!(cleared.into_option(), None);
//! ```

#![warn(missing_docs)]

pub mod nullable;
pub mod num;

// Re-exports
pub use nullable::Nullable;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
