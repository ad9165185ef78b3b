//! Field resolver
//!
//! Drives one partial update: iterates the record's declared fields,
//! decides eligibility, resolves each field's external key against the
//! patch, and funnels matched values through the coercion order
//! (sequence routine, identity fast path, then the configured chain).

use crate::patch::Patch;
use crate::seq::update_sequence;
use crate::updaters::{Updater, DEFAULT_UPDATERS};
use fieldpatch_record::{KeySource, Record, SkipRule, Slot, UpdateError};
use tracing::{debug, trace};

/// Apply a patch to a record.
///
/// Fields are processed in declaration order. For each settable field
/// not excluded by a skip rule, the external key (per `keys`) is
/// looked up in the patch; absent keys leave the field untouched.
/// Present values coerce via the sequence routine for sequence-typed
/// fields, the identity fast path for exact shape matches, then each
/// updater in `updaters` until one applies.
///
/// Returns the names of the updated fields, in declaration order.
///
/// Duplicate external keys resolve to the first declared field; later
/// fields sharing the key are skipped.
///
/// # Errors
///
/// - [`UpdateError::InvalidTarget`] when the record cannot expose
///   mutable fields; raised before anything is written.
/// - [`UpdateError::FieldAssignment`] when a matched field accepts no
///   coercion. The update is not atomic: fields processed before the
///   failing one keep their new values.
pub fn update<R: Record + ?Sized>(
    record: &mut R,
    patch: &Patch,
    keys: KeySource,
    skip_rules: &[SkipRule],
    updaters: &[Updater],
) -> Result<Vec<&'static str>, UpdateError> {
    let record_name = record.record_name();
    let fields = record.fields_mut()?;

    let mut updated = Vec::new();
    let mut claimed: Vec<&'static str> = Vec::new();

    for mut field in fields {
        if !field.meta.settable {
            continue;
        }
        if skip_rules.iter().any(|skip| skip(&field.meta)) {
            continue;
        }
        let Some(key) = keys.key_of(&field.meta) else {
            continue;
        };
        // first declared field wins a duplicated external key
        if claimed.contains(&key) {
            continue;
        }
        let Some(raw) = patch.get(key) else {
            continue;
        };
        claimed.push(key);

        let applied = if let Slot::Seq(slot) = &mut field.slot {
            update_sequence(slot, raw)
        } else if field.slot.try_exact(raw) {
            true
        } else {
            updaters.iter().any(|updater| updater(&mut field.slot, raw))
        };

        if !applied {
            return Err(UpdateError::assignment(record_name, field.meta.name, raw));
        }

        trace!(record = record_name, field = field.meta.name, "field updated");
        updated.push(field.meta.name);
    }

    debug!(
        record = record_name,
        updated = updated.len(),
        "partial update applied"
    );
    Ok(updated)
}

/// [`update`] with the usual configuration: field names as keys, no
/// skip rules, and the default coercion chain.
///
/// # Errors
///
/// Same as [`update`].
pub fn update_with_defaults<R: Record + ?Sized>(
    record: &mut R,
    patch: &Patch,
) -> Result<Vec<&'static str>, UpdateError> {
    update(record, patch, KeySource::FieldName, &[], DEFAULT_UPDATERS)
}
