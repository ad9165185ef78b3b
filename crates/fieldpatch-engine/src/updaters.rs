//! Coercion rules
//!
//! Each rule is a stateless function pairing one semantic field kind
//! with the raw shapes it accepts. A rule mutates through the slot and
//! reports `true`, or declines with `false` so the chain moves on;
//! declining is never an error by itself.
//!
//! Rules are order-sensitive in principle, so the default chain lists
//! the nullable-wrapper rules ahead of the generic scalar rules. In
//! practice each rule keys off a distinct slot kind and they do not
//! collide.

use chrono::{DateTime, Utc};
use fieldpatch_record::Slot;
use fieldpatch_value::num;
use serde_json::Value;

/// A coercion rule: applies a raw value to a slot, or declines
pub type Updater = fn(&mut Slot<'_>, &Value) -> bool;

/// Default chain covering every built-in rule
///
/// Nullable-wrapper rules come first, then the plain scalar family
/// rules.
pub const DEFAULT_UPDATERS: &[Updater] = &[
    nullable_string_updater,
    nullable_float_updater,
    nullable_int_updater,
    nullable_bool_updater,
    nullable_time_updater,
    int_updater,
    uint_updater,
    float_updater,
    time_updater,
    bool_updater,
];

/// Plain scalar subset, for callers whose records carry no nullable
/// wrapper fields
pub const SCALAR_UPDATERS: &[Updater] = &[
    int_updater,
    uint_updater,
    float_updater,
    time_updater,
    bool_updater,
];

/// Nullable string wrapper, plus pointer-shaped `Option<String>`.
///
/// Explicit null clears; a string raw sets the payload; any other
/// shape declines.
pub fn nullable_string_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    match slot {
        Slot::NullableStr(place) => match raw {
            Value::Null => {
                place.clear();
                true
            }
            Value::String(s) => {
                place.set(s.clone());
                true
            }
            _ => false,
        },
        Slot::OptStr(place) => match raw {
            Value::Null => {
                **place = None;
                true
            }
            Value::String(s) => {
                **place = Some(s.clone());
                true
            }
            _ => false,
        },
        _ => false,
    }
}

/// Nullable float wrapper: null clears, any numeric shape sets.
pub fn nullable_float_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    let Slot::NullableFloat(place) = slot else {
        return false;
    };
    match raw {
        Value::Null => {
            place.clear();
            true
        }
        _ => num::to_f64(raw).is_some_and(|f| {
            place.set(f);
            true
        }),
    }
}

/// Nullable integer wrapper: null clears, any numeric shape sets,
/// floating-point sources truncating toward zero.
pub fn nullable_int_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    let Slot::NullableInt(place) = slot else {
        return false;
    };
    match raw {
        Value::Null => {
            place.clear();
            true
        }
        _ => num::to_i64(raw).is_some_and(|n| {
            place.set(n);
            true
        }),
    }
}

/// Nullable boolean wrapper: null clears, exact bool shape sets.
pub fn nullable_bool_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    let Slot::NullableBool(place) = slot else {
        return false;
    };
    match raw {
        Value::Null => {
            place.clear();
            true
        }
        Value::Bool(b) => {
            place.set(*b);
            true
        }
        _ => false,
    }
}

/// Nullable timestamp wrapper: null clears, the canonical RFC 3339
/// text form sets; a string that fails to parse declines.
pub fn nullable_time_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    let Slot::NullableTime(place) = slot else {
        return false;
    };
    match raw {
        Value::Null => {
            place.clear();
            true
        }
        Value::String(s) => parse_rfc3339(s).is_some_and(|t| {
            place.set(t);
            true
        }),
        _ => false,
    }
}

/// Signed integer family, all widths, plain and pointer-shaped.
///
/// Any numeric raw shape converts with width-overflow checks;
/// pointer-shaped targets also accept explicit null.
pub fn int_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    let Slot::Int(target) = slot else {
        return false;
    };
    match raw {
        Value::Null => target.clear(),
        _ => num::to_i64(raw).is_some_and(|n| target.set(n)),
    }
}

/// Unsigned integer family, all widths, plain and pointer-shaped.
///
/// Negative raw values are rejected outright before width checks;
/// pointer-shaped targets also accept explicit null.
pub fn uint_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    let Slot::Uint(target) = slot else {
        return false;
    };
    match raw {
        Value::Null => target.clear(),
        _ => num::to_u64(raw).is_some_and(|n| target.set(n)),
    }
}

/// Floating-point family, plain and pointer-shaped, with f32 range
/// checks.
pub fn float_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    let Slot::Float(target) = slot else {
        return false;
    };
    match raw {
        Value::Null => target.clear(),
        _ => num::to_f64(raw).is_some_and(|f| target.set(f)),
    }
}

/// Timestamps: integer or float raw is a Unix epoch-seconds count,
/// string raw is RFC 3339; pointer-shaped targets accept explicit
/// null.
pub fn time_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    match slot {
        Slot::Time(place) => parse_time(raw).is_some_and(|t| {
            **place = t;
            true
        }),
        Slot::OptTime(place) => match raw {
            Value::Null => {
                **place = None;
                true
            }
            _ => parse_time(raw).is_some_and(|t| {
                **place = Some(t);
                true
            }),
        },
        _ => false,
    }
}

/// Booleans: exact bool shape, plain and pointer-shaped.
pub fn bool_updater(slot: &mut Slot<'_>, raw: &Value) -> bool {
    match (slot, raw) {
        (Slot::Bool(place), Value::Bool(b)) => {
            **place = *b;
            true
        }
        (Slot::OptBool(place), Value::Bool(b)) => {
            **place = Some(*b);
            true
        }
        (Slot::OptBool(place), Value::Null) => {
            **place = None;
            true
        }
        _ => false,
    }
}

fn parse_time(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        // epoch seconds; float sources truncate toward zero
        Value::Number(_) => num::to_i64(raw).and_then(|secs| DateTime::from_timestamp(secs, 0)),
        Value::String(s) => parse_rfc3339(s),
        _ => None,
    }
}

fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldpatch_record::{FloatSlot, IntSlot, UintSlot};
    use fieldpatch_value::Nullable;
    use serde_json::json;

    #[test]
    fn nullable_string_sets_and_clears() {
        let mut field: Nullable<String> = Nullable::none();

        assert!(nullable_string_updater(
            &mut Slot::NullableStr(&mut field),
            &json!("hi")
        ));
        assert_eq!(field.value().map(String::as_str), Some("hi"));

        assert!(nullable_string_updater(
            &mut Slot::NullableStr(&mut field),
            &Value::Null
        ));
        assert!(!field.is_valid());
    }

    #[test]
    fn nullable_string_declines_other_shapes() {
        let mut field: Nullable<String> = Nullable::none();
        assert!(!nullable_string_updater(
            &mut Slot::NullableStr(&mut field),
            &json!(42)
        ));

        let mut other = 0_i64;
        assert!(!nullable_string_updater(
            &mut Slot::Int(IntSlot::I64(&mut other)),
            &json!("hi")
        ));
    }

    #[test]
    fn nullable_string_covers_option_string() {
        let mut field = Some("old".to_string());
        assert!(nullable_string_updater(
            &mut Slot::OptStr(&mut field),
            &Value::Null
        ));
        assert_eq!(field, None);
    }

    #[test]
    fn nullable_int_truncates_floats() {
        let mut field: Nullable<i64> = Nullable::none();
        assert!(nullable_int_updater(
            &mut Slot::NullableInt(&mut field),
            &json!(12.9)
        ));
        assert_eq!(field.value(), Some(&12));
    }

    #[test]
    fn nullable_float_accepts_integer_shape() {
        let mut field: Nullable<f64> = Nullable::none();
        assert!(nullable_float_updater(
            &mut Slot::NullableFloat(&mut field),
            &json!(42)
        ));
        assert_eq!(field.value(), Some(&42.0));
    }

    #[test]
    fn nullable_bool_exact_shape_only() {
        let mut field: Nullable<bool> = Nullable::none();
        assert!(nullable_bool_updater(
            &mut Slot::NullableBool(&mut field),
            &json!(true)
        ));
        assert_eq!(field.value(), Some(&true));
        assert!(!nullable_bool_updater(
            &mut Slot::NullableBool(&mut field),
            &json!(1)
        ));
    }

    #[test]
    fn nullable_time_parses_rfc3339_only() {
        let mut field: Nullable<DateTime<Utc>> = Nullable::none();
        assert!(nullable_time_updater(
            &mut Slot::NullableTime(&mut field),
            &json!("2024-05-01T10:00:00Z")
        ));
        assert!(field.is_valid());

        assert!(!nullable_time_updater(
            &mut Slot::NullableTime(&mut field),
            &json!("yesterday")
        ));
        assert!(!nullable_time_updater(
            &mut Slot::NullableTime(&mut field),
            &json!(1_714_000_000)
        ));

        assert!(nullable_time_updater(
            &mut Slot::NullableTime(&mut field),
            &Value::Null
        ));
        assert!(!field.is_valid());
    }

    #[test]
    fn int_updater_checks_width() {
        let mut field = 0_i8;
        assert!(int_updater(
            &mut Slot::Int(IntSlot::I8(&mut field)),
            &json!(100)
        ));
        assert_eq!(field, 100);
        assert!(!int_updater(
            &mut Slot::Int(IntSlot::I8(&mut field)),
            &json!(999)
        ));
        assert_eq!(field, 100);
    }

    #[test]
    fn int_updater_null_only_for_pointer_shape() {
        let mut plain = 7_i64;
        assert!(!int_updater(
            &mut Slot::Int(IntSlot::I64(&mut plain)),
            &Value::Null
        ));

        let mut opt = Some(7_i64);
        assert!(int_updater(
            &mut Slot::Int(IntSlot::OptI64(&mut opt)),
            &Value::Null
        ));
        assert_eq!(opt, None);
    }

    #[test]
    fn uint_updater_rejects_negatives() {
        let mut field = 3_u8;
        assert!(!uint_updater(
            &mut Slot::Uint(UintSlot::U8(&mut field)),
            &json!(-1)
        ));
        assert!(!uint_updater(
            &mut Slot::Uint(UintSlot::U8(&mut field)),
            &json!(-0.5)
        ));
        assert_eq!(field, 3);
    }

    #[test]
    fn float_updater_narrows_f32() {
        let mut field = 0.0_f32;
        assert!(float_updater(
            &mut Slot::Float(FloatSlot::F32(&mut field)),
            &json!(2.5)
        ));
        assert!(!float_updater(
            &mut Slot::Float(FloatSlot::F32(&mut field)),
            &json!(1e300)
        ));
    }

    #[test]
    fn time_updater_epoch_and_text_forms() {
        let mut field = DateTime::<Utc>::MIN_UTC;
        assert!(time_updater(
            &mut Slot::Time(&mut field),
            &json!(1_714_000_000)
        ));
        assert_eq!(field.timestamp(), 1_714_000_000);

        assert!(time_updater(
            &mut Slot::Time(&mut field),
            &json!("2024-05-01T10:00:00+02:00")
        ));
        assert_eq!(field.to_rfc3339(), "2024-05-01T08:00:00+00:00");

        assert!(!time_updater(&mut Slot::Time(&mut field), &json!("not a date")));
        assert!(!time_updater(&mut Slot::Time(&mut field), &Value::Null));
    }

    #[test]
    fn time_updater_pointer_shape_accepts_null() {
        let mut field = Some(DateTime::<Utc>::MIN_UTC);
        assert!(time_updater(&mut Slot::OptTime(&mut field), &Value::Null));
        assert_eq!(field, None);
    }

    #[test]
    fn time_updater_truncates_float_epoch() {
        let mut field = DateTime::<Utc>::MIN_UTC;
        assert!(time_updater(
            &mut Slot::Time(&mut field),
            &json!(1_714_000_000.9)
        ));
        assert_eq!(field.timestamp(), 1_714_000_000);
    }

    #[test]
    fn bool_updater_shapes() {
        let mut plain = false;
        assert!(bool_updater(&mut Slot::Bool(&mut plain), &json!(true)));
        assert!(plain);
        assert!(!bool_updater(&mut Slot::Bool(&mut plain), &json!(1)));
        assert!(!bool_updater(&mut Slot::Bool(&mut plain), &Value::Null));

        let mut opt = Some(true);
        assert!(bool_updater(&mut Slot::OptBool(&mut opt), &Value::Null));
        assert_eq!(opt, None);
    }

    #[test]
    fn chain_constants_cover_all_rules() {
        assert_eq!(DEFAULT_UPDATERS.len(), 10);
        assert_eq!(SCALAR_UPDATERS.len(), 5);
    }
}
