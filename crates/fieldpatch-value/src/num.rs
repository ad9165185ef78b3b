//! Checked numeric coercion from untyped JSON numbers
//!
//! Raw patch values carry numbers in one of three shapes (i64, u64,
//! f64). These helpers collapse any of them into a target family with
//! explicit range checks: out-of-range values yield `None` so the
//! caller can decline the coercion instead of panicking or wrapping.
//!
//! Floating-point sources truncate toward zero, never round.

use serde_json::Value;

// 2^63 and 2^64 are exactly representable in f64; values at or beyond
// the bound do not fit the signed/unsigned 64-bit range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Coerce a raw value into the signed integer family.
///
/// Accepts any numeric shape; floating-point sources truncate toward
/// zero. Returns `None` for non-numeric shapes and for values outside
/// the i64 range.
#[must_use]
pub fn to_i64(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(f64_to_i64)),
        _ => None,
    }
}

/// Coerce a raw value into the unsigned integer family.
///
/// Any negative numeric value is rejected outright, before width
/// checks. Floating-point sources truncate toward zero.
#[must_use]
pub fn to_u64(raw: &Value) -> Option<u64> {
    match raw {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(f64_to_u64)),
        _ => None,
    }
}

/// Coerce a raw value into the floating-point family.
///
/// Integer shapes widen losslessly where f64 precision allows, the
/// same way the untyped source data would have been decoded.
#[must_use]
pub fn to_f64(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Narrow an f64 into f32 range, declining on overflow.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn narrow_f32(f: f64) -> Option<f32> {
    if f.is_finite() && f.abs() > f64::from(f32::MAX) {
        None
    } else {
        Some(f as f32)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn f64_to_i64(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    (-I64_BOUND..I64_BOUND).contains(&t).then_some(t as i64)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn f64_to_u64(f: f64) -> Option<u64> {
    // Negative rejection happens on the raw value, so -0.5 declines
    // rather than truncating to 0.
    if !f.is_finite() || f < 0.0 {
        return None;
    }
    let t = f.trunc();
    (t < U64_BOUND).then_some(t as u64)
}
