//! Sequence coercion
//!
//! The dedicated routine the resolver delegates to for sequence-typed
//! fields, ahead of the coercion chain. Elements convert in element
//! order; one failing element fails the whole field, and the target
//! vector is only replaced after every element converted.

use fieldpatch_record::SeqSlot;
use fieldpatch_value::num;
use serde_json::Value;

/// Coerce a raw sequence into a sequence-typed slot.
///
/// Declines when the raw value is not sequence-shaped or any element
/// does not convert; the field keeps its previous contents in that
/// case. Numeric elements accept any numeric shape (floats truncate
/// toward zero for integer targets); string and boolean elements
/// require their exact shape.
pub fn update_sequence(slot: &mut SeqSlot<'_>, raw: &Value) -> bool {
    let Value::Array(items) = raw else {
        return false;
    };
    match slot {
        SeqSlot::Bool(place) => assign(&mut **place, items, Value::as_bool),
        SeqSlot::Int(place) => assign(&mut **place, items, num::to_i64),
        SeqSlot::Float(place) => assign(&mut **place, items, num::to_f64),
        SeqSlot::Str(place) => assign(&mut **place, items, |v| v.as_str().map(str::to_owned)),
    }
}

fn assign<T>(place: &mut Vec<T>, items: &[Value], convert: impl Fn(&Value) -> Option<T>) -> bool {
    match items.iter().map(convert).collect::<Option<Vec<T>>>() {
        Some(converted) => {
            *place = converted;
            true
        }
        None => false,
    }
}
