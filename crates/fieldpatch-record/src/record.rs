//! The Record trait and field pairing
//!
//! Provides [`Record`], implemented by any type that wants patch
//! support, and [`Field`], the descriptor/slot pair the resolver
//! iterates.

use crate::error::UpdateError;
use crate::meta::FieldMeta;
use crate::slot::Slot;

/// One field of a record: static metadata plus a mutable slot
#[derive(Debug)]
pub struct Field<'a> {
    /// Static descriptor
    pub meta: FieldMeta,

    /// Mutable borrow of the field's storage
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Pair a descriptor with its slot
    #[inline]
    #[must_use]
    pub fn new(meta: FieldMeta, slot: Slot<'a>) -> Self {
        Self { meta, slot }
    }
}

/// A structured value that exposes its fields for partial update
///
/// Implementations enumerate every declared field in declaration
/// order; the resolver relies on that order for its result sequence.
/// Fields borrow disjoint storage, so a plain struct builds the vector
/// in a single expression.
///
/// # Errors
///
/// `fields_mut` fails with [`UpdateError::InvalidTarget`] when the
/// value cannot expose mutable slots, for example a record proxying
/// storage it does not own. The engine raises that error before any
/// field is touched.
pub trait Record {
    /// Record type name, used in error messages
    fn record_name(&self) -> &'static str;

    /// Ordered field list, borrowing each field's storage mutably
    fn fields_mut(&mut self) -> Result<Vec<Field<'_>>, UpdateError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::IntSlot;
    use pretty_assertions::assert_eq;

    struct Point {
        x: i32,
        y: i32,
    }

    impl Record for Point {
        fn record_name(&self) -> &'static str {
            "Point"
        }

        fn fields_mut(&mut self) -> Result<Vec<Field<'_>>, UpdateError> {
            Ok(vec![
                Field::new(FieldMeta::new("X"), Slot::Int(IntSlot::I32(&mut self.x))),
                Field::new(FieldMeta::new("Y"), Slot::Int(IntSlot::I32(&mut self.y))),
            ])
        }
    }

    #[test]
    fn fields_follow_declaration_order() {
        let mut p = Point { x: 1, y: 2 };
        let fields = p.fields_mut().unwrap();

        let names: Vec<_> = fields.iter().map(|f| f.meta.name).collect();
        assert_eq!(names, ["X", "Y"]);
    }

    #[test]
    fn slots_mutate_through_to_storage() {
        let mut p = Point { x: 1, y: 2 };
        {
            let mut fields = p.fields_mut().unwrap();
            if let Slot::Int(slot) = &mut fields[0].slot {
                assert!(slot.set(9));
            }
        }
        assert_eq!(p.x, 9);
    }
}
