/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Visitor callbacks for message tree traversal.
//!
//! Every callback defaults to a no-op so a consumer implements only the
//! kinds it cares about. The walker dispatches on the field's variant tag,
//! so a visitor never sees a payload under the wrong type.

use fastwire_core::{Decimal, FieldIdentity, WalkError};
use fastwire_message::Sequence;

/// Callbacks invoked by [`walk`](crate::walk) during a depth-first,
/// pre-order traversal.
///
/// `depth` is the nesting level of the visited field: 0 for top-level
/// message fields, incremented once per enclosing group or sequence. The
/// walker threads depth through the recursion explicitly, so a failing
/// callback cannot leak indentation state to its caller.
#[allow(unused_variables)]
pub trait MessageVisitor {
    /// Visits an Int32 leaf.
    fn on_int32(
        &mut self,
        identity: &FieldIdentity,
        value: i32,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Visits a UInt32 leaf.
    fn on_uint32(
        &mut self,
        identity: &FieldIdentity,
        value: u32,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Visits an Int64 leaf.
    fn on_int64(
        &mut self,
        identity: &FieldIdentity,
        value: i64,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Visits a UInt64 leaf.
    fn on_uint64(
        &mut self,
        identity: &FieldIdentity,
        value: u64,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Visits a Decimal leaf.
    fn on_decimal(
        &mut self,
        identity: &FieldIdentity,
        value: Decimal,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Visits an ASCII string leaf.
    fn on_ascii(
        &mut self,
        identity: &FieldIdentity,
        value: &str,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Visits a UTF-8 string leaf.
    fn on_utf8(
        &mut self,
        identity: &FieldIdentity,
        value: &str,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Visits a byte vector leaf.
    fn on_byte_vector(
        &mut self,
        identity: &FieldIdentity,
        value: &[u8],
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Enters a group; its fields follow at `depth + 1`.
    fn enter_group(&mut self, identity: &FieldIdentity, depth: usize) -> Result<(), WalkError> {
        Ok(())
    }

    /// Leaves a group, back at the group field's own depth.
    fn leave_group(&mut self, identity: &FieldIdentity, depth: usize) -> Result<(), WalkError> {
        Ok(())
    }

    /// Enters a sequence; called once for the whole sequence, before any
    /// entry. Entries follow at `depth + 1`.
    fn enter_sequence(
        &mut self,
        identity: &FieldIdentity,
        sequence: &Sequence,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Enters sequence entry `index` (0-based, in list order).
    fn enter_sequence_entry(
        &mut self,
        identity: &FieldIdentity,
        index: usize,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Leaves sequence entry `index`.
    fn leave_sequence_entry(
        &mut self,
        identity: &FieldIdentity,
        index: usize,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Leaves a sequence after its last entry.
    fn leave_sequence(
        &mut self,
        identity: &FieldIdentity,
        sequence: &Sequence,
        depth: usize,
    ) -> Result<(), WalkError> {
        Ok(())
    }

    /// Notifies the visitor that a structural error aborted one field.
    ///
    /// The walker logs the error, invokes this callback, and continues with
    /// the field's siblings.
    fn on_structural_error(&mut self, identity: &FieldIdentity, detail: &str, depth: usize) {}
}
