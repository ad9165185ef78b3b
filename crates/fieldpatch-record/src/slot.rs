//! Typed mutable field slots
//!
//! Provides the [`Slot`] tagged variant family: one variant per
//! semantic field kind, with the per-width branching of the integer,
//! unsigned and float families collapsed into nested enums whose
//! assignment routines are generic over the target width.
//!
//! A slot borrows the field's storage for the duration of one update
//! call; coercion rules mutate through it and report whether they
//! applied.

use chrono::{DateTime, Utc};
use fieldpatch_value::{num, Nullable};
use serde_json::Value;

/// Mutable borrow of one field's storage, tagged by semantic kind
#[derive(Debug)]
pub enum Slot<'a> {
    /// Plain boolean
    Bool(&'a mut bool),
    /// Pointer-shaped boolean; explicit null resets to `None`
    OptBool(&'a mut Option<bool>),
    /// Signed integer family, any width, plain or pointer-shaped
    Int(IntSlot<'a>),
    /// Unsigned integer family, any width, plain or pointer-shaped
    Uint(UintSlot<'a>),
    /// Floating-point family, plain or pointer-shaped
    Float(FloatSlot<'a>),
    /// Plain string
    Str(&'a mut String),
    /// Pointer-shaped string; explicit null resets to `None`
    OptStr(&'a mut Option<String>),
    /// Plain timestamp
    Time(&'a mut DateTime<Utc>),
    /// Pointer-shaped timestamp; explicit null resets to `None`
    OptTime(&'a mut Option<DateTime<Utc>>),
    /// Nullable string wrapper
    NullableStr(&'a mut Nullable<String>),
    /// Nullable integer wrapper (i64 payload)
    NullableInt(&'a mut Nullable<i64>),
    /// Nullable float wrapper (f64 payload)
    NullableFloat(&'a mut Nullable<f64>),
    /// Nullable boolean wrapper
    NullableBool(&'a mut Nullable<bool>),
    /// Nullable timestamp wrapper
    NullableTime(&'a mut Nullable<DateTime<Utc>>),
    /// Sequence of scalar elements
    Seq(SeqSlot<'a>),
}

impl Slot<'_> {
    /// Identity fast path: assign when the raw shape matches the
    /// declared shape exactly, with no conversion.
    ///
    /// Narrower widths and pointer/nullable shapes always decline here
    /// and fall through to the coercion chain.
    pub fn try_exact(&mut self, raw: &Value) -> bool {
        match (self, raw) {
            (Self::Bool(place), Value::Bool(b)) => {
                **place = *b;
                true
            }
            (Self::Str(place), Value::String(s)) => {
                **place = s.clone();
                true
            }
            (Self::Int(IntSlot::I64(place)), Value::Number(n)) => match n.as_i64() {
                Some(v) => {
                    **place = v;
                    true
                }
                None => false,
            },
            (Self::Uint(UintSlot::U64(place)), Value::Number(n)) => match n.as_u64() {
                Some(v) => {
                    **place = v;
                    true
                }
                None => false,
            },
            (Self::Float(FloatSlot::F64(place)), Value::Number(n)) if n.is_f64() => {
                match n.as_f64() {
                    Some(v) => {
                        **place = v;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

/// Signed integer slot, width-tagged
#[derive(Debug)]
#[allow(missing_docs)]
pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    OptI8(&'a mut Option<i8>),
    OptI16(&'a mut Option<i16>),
    OptI32(&'a mut Option<i32>),
    OptI64(&'a mut Option<i64>),
}

impl IntSlot<'_> {
    /// Width-checked assignment; declines when `n` does not fit.
    pub fn set(&mut self, n: i64) -> bool {
        match self {
            Self::I8(place) => narrow(&mut **place, n),
            Self::I16(place) => narrow(&mut **place, n),
            Self::I32(place) => narrow(&mut **place, n),
            Self::I64(place) => narrow(&mut **place, n),
            Self::OptI8(place) => narrow_opt(&mut **place, n),
            Self::OptI16(place) => narrow_opt(&mut **place, n),
            Self::OptI32(place) => narrow_opt(&mut **place, n),
            Self::OptI64(place) => narrow_opt(&mut **place, n),
        }
    }

    /// Reset a pointer-shaped slot to `None`; plain widths decline.
    pub fn clear(&mut self) -> bool {
        match self {
            Self::OptI8(place) => clear_opt(&mut **place),
            Self::OptI16(place) => clear_opt(&mut **place),
            Self::OptI32(place) => clear_opt(&mut **place),
            Self::OptI64(place) => clear_opt(&mut **place),
            _ => false,
        }
    }
}

/// Unsigned integer slot, width-tagged
#[derive(Debug)]
#[allow(missing_docs)]
pub enum UintSlot<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    OptU8(&'a mut Option<u8>),
    OptU16(&'a mut Option<u16>),
    OptU32(&'a mut Option<u32>),
    OptU64(&'a mut Option<u64>),
}

impl UintSlot<'_> {
    /// Width-checked assignment; declines when `n` does not fit.
    ///
    /// Negative rejection happens upstream, when the raw value is
    /// coerced into u64.
    pub fn set(&mut self, n: u64) -> bool {
        match self {
            Self::U8(place) => narrow(&mut **place, n),
            Self::U16(place) => narrow(&mut **place, n),
            Self::U32(place) => narrow(&mut **place, n),
            Self::U64(place) => narrow(&mut **place, n),
            Self::OptU8(place) => narrow_opt(&mut **place, n),
            Self::OptU16(place) => narrow_opt(&mut **place, n),
            Self::OptU32(place) => narrow_opt(&mut **place, n),
            Self::OptU64(place) => narrow_opt(&mut **place, n),
        }
    }

    /// Reset a pointer-shaped slot to `None`; plain widths decline.
    pub fn clear(&mut self) -> bool {
        match self {
            Self::OptU8(place) => clear_opt(&mut **place),
            Self::OptU16(place) => clear_opt(&mut **place),
            Self::OptU32(place) => clear_opt(&mut **place),
            Self::OptU64(place) => clear_opt(&mut **place),
            _ => false,
        }
    }
}

/// Floating-point slot, width-tagged
#[derive(Debug)]
#[allow(missing_docs)]
pub enum FloatSlot<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
    OptF32(&'a mut Option<f32>),
    OptF64(&'a mut Option<f64>),
}

impl FloatSlot<'_> {
    /// Range-checked assignment; f32 targets decline on overflow.
    pub fn set(&mut self, f: f64) -> bool {
        match self {
            Self::F32(place) => match num::narrow_f32(f) {
                Some(v) => {
                    **place = v;
                    true
                }
                None => false,
            },
            Self::F64(place) => {
                **place = f;
                true
            }
            Self::OptF32(place) => match num::narrow_f32(f) {
                Some(v) => {
                    **place = Some(v);
                    true
                }
                None => false,
            },
            Self::OptF64(place) => {
                **place = Some(f);
                true
            }
        }
    }

    /// Reset a pointer-shaped slot to `None`; plain widths decline.
    pub fn clear(&mut self) -> bool {
        match self {
            Self::OptF32(place) => clear_opt(&mut **place),
            Self::OptF64(place) => clear_opt(&mut **place),
            _ => false,
        }
    }
}

/// Sequence slot over supported element kinds
#[derive(Debug)]
pub enum SeqSlot<'a> {
    /// Boolean elements, exact shape only
    Bool(&'a mut Vec<bool>),
    /// Signed integer elements, any numeric shape with truncation
    Int(&'a mut Vec<i64>),
    /// Float elements, any numeric shape
    Float(&'a mut Vec<f64>),
    /// String elements, exact shape only
    Str(&'a mut Vec<String>),
}

fn narrow<S, T: TryFrom<S>>(place: &mut T, n: S) -> bool {
    match T::try_from(n) {
        Ok(v) => {
            *place = v;
            true
        }
        Err(_) => false,
    }
}

fn narrow_opt<S, T: TryFrom<S>>(place: &mut Option<T>, n: S) -> bool {
    match T::try_from(n) {
        Ok(v) => {
            *place = Some(v);
            true
        }
        Err(_) => false,
    }
}

fn clear_opt<T>(place: &mut Option<T>) -> bool {
    *place = None;
    true
}
