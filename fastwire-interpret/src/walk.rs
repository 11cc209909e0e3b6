/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! The shared dispatch skeleton.
//!
//! A depth-first, pre-order walk of a [`FieldSet`] tree that dispatches on
//! each field's variant tag. Fields are visited in exactly insertion order
//! at every nesting level, sequence entries in list order, and no field is
//! visited more than once.

use crate::visitor::MessageVisitor;
use fastwire_core::WalkError;
use fastwire_message::{Field, FieldSet};
use tracing::warn;

/// Defensive recursion cap.
///
/// FAST templates cannot self-reference, so conforming trees terminate well
/// below this. Exceeding it fails with [`WalkError::DepthExceeded`] instead
/// of overflowing the stack.
pub const MAX_WALK_DEPTH: usize = 64;

/// Walks a field-set tree, dispatching each field to the visitor.
///
/// A [`WalkError::Structural`] raised by a visitor callback aborts that
/// field only: it is logged, reported through
/// [`MessageVisitor::on_structural_error`], and the walk continues with the
/// field's siblings. All other errors propagate and abort the walk.
///
/// # Errors
/// Returns `WalkError::DepthExceeded` past [`MAX_WALK_DEPTH`], or whatever
/// non-structural error a visitor callback raised.
pub fn walk<V>(set: &FieldSet, visitor: &mut V) -> Result<(), WalkError>
where
    V: MessageVisitor + ?Sized,
{
    walk_at(set, visitor, 0)
}

fn walk_at<V>(set: &FieldSet, visitor: &mut V, depth: usize) -> Result<(), WalkError>
where
    V: MessageVisitor + ?Sized,
{
    if depth >= MAX_WALK_DEPTH {
        return Err(WalkError::DepthExceeded {
            depth,
            limit: MAX_WALK_DEPTH,
        });
    }
    for (identity, field) in set.iter() {
        match visit_field(identity, field, visitor, depth) {
            Err(WalkError::Structural { detail }) => {
                warn!(field = %identity, "structural error: {}", detail);
                visitor.on_structural_error(identity, &detail, depth);
            }
            other => other?,
        }
    }
    Ok(())
}

fn visit_field<V>(
    identity: &fastwire_core::FieldIdentity,
    field: &Field,
    visitor: &mut V,
    depth: usize,
) -> Result<(), WalkError>
where
    V: MessageVisitor + ?Sized,
{
    match field {
        Field::Int32(v) => visitor.on_int32(identity, *v, depth),
        Field::UInt32(v) => visitor.on_uint32(identity, *v, depth),
        Field::Int64(v) => visitor.on_int64(identity, *v, depth),
        Field::UInt64(v) => visitor.on_uint64(identity, *v, depth),
        Field::Decimal(v) => visitor.on_decimal(identity, *v, depth),
        Field::Ascii(v) => visitor.on_ascii(identity, v, depth),
        Field::Utf8(v) => visitor.on_utf8(identity, v, depth),
        Field::ByteVector(v) => visitor.on_byte_vector(identity, v, depth),
        Field::Group(group) => {
            visitor.enter_group(identity, depth)?;
            walk_at(group, visitor, depth + 1)?;
            visitor.leave_group(identity, depth)
        }
        Field::Sequence(sequence) => {
            visitor.enter_sequence(identity, sequence, depth)?;
            for (index, entry) in sequence.iter().enumerate() {
                visitor.enter_sequence_entry(identity, index, depth + 1)?;
                walk_at(entry, visitor, depth + 1)?;
                visitor.leave_sequence_entry(identity, index, depth + 1)?;
            }
            visitor.leave_sequence(identity, sequence, depth)
        }
    }
}
