/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Per-kind statistics over delivered messages.
//!
//! The accumulator is an owned struct passed by exclusive mutable access to
//! the traversal, never process-wide state. Used for load testing and for
//! verifying traversal coverage.

use crate::visitor::MessageVisitor;
use crate::walk::walk;
use fastwire_core::{Decimal, FieldIdentity, WalkError};
use fastwire_engine::MessageConsumer;
use fastwire_message::{Message, Sequence};
use tracing::error;

/// Counts gathered during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeCounts {
    /// Int32 leaves visited.
    pub int32: usize,
    /// UInt32 leaves visited.
    pub uint32: usize,
    /// Int64 leaves visited.
    pub int64: usize,
    /// UInt64 leaves visited.
    pub uint64: usize,
    /// Decimal leaves visited.
    pub decimal: usize,
    /// ASCII string leaves visited.
    pub ascii: usize,
    /// UTF-8 string leaves visited.
    pub utf8: usize,
    /// Byte vector leaves visited.
    pub byte_vector: usize,
    /// Sequences entered.
    pub sequences: usize,
    /// Sequence entries entered.
    pub sequence_entries: usize,
    /// Groups entered.
    pub groups: usize,
    /// Messages consumed.
    pub messages: usize,
    /// Structural errors reported by the walker.
    pub structural_errors: usize,
}

impl TypeCounts {
    /// Total scalar leaves visited, across every nesting level.
    #[must_use]
    pub const fn scalar_total(&self) -> usize {
        self.int32
            + self.uint32
            + self.int64
            + self.uint64
            + self.decimal
            + self.ascii
            + self.utf8
            + self.byte_vector
    }
}

/// A consumer that counts fields by kind instead of formatting them.
#[derive(Debug, Default)]
pub struct MessageCounter {
    counts: TypeCounts,
}

impl MessageCounter {
    /// Creates a counter with all counts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the counts gathered so far.
    #[must_use]
    pub const fn counts(&self) -> TypeCounts {
        self.counts
    }
}

impl MessageVisitor for MessageCounter {
    fn on_int32(
        &mut self,
        _identity: &FieldIdentity,
        _value: i32,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.int32 += 1;
        Ok(())
    }

    fn on_uint32(
        &mut self,
        _identity: &FieldIdentity,
        _value: u32,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.uint32 += 1;
        Ok(())
    }

    fn on_int64(
        &mut self,
        _identity: &FieldIdentity,
        _value: i64,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.int64 += 1;
        Ok(())
    }

    fn on_uint64(
        &mut self,
        _identity: &FieldIdentity,
        _value: u64,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.uint64 += 1;
        Ok(())
    }

    fn on_decimal(
        &mut self,
        _identity: &FieldIdentity,
        _value: Decimal,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.decimal += 1;
        Ok(())
    }

    fn on_ascii(
        &mut self,
        _identity: &FieldIdentity,
        _value: &str,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.ascii += 1;
        Ok(())
    }

    fn on_utf8(
        &mut self,
        _identity: &FieldIdentity,
        _value: &str,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.utf8 += 1;
        Ok(())
    }

    fn on_byte_vector(
        &mut self,
        _identity: &FieldIdentity,
        _value: &[u8],
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.byte_vector += 1;
        Ok(())
    }

    fn enter_group(&mut self, _identity: &FieldIdentity, _depth: usize) -> Result<(), WalkError> {
        self.counts.groups += 1;
        Ok(())
    }

    fn enter_sequence(
        &mut self,
        _identity: &FieldIdentity,
        _sequence: &Sequence,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.sequences += 1;
        Ok(())
    }

    fn enter_sequence_entry(
        &mut self,
        _identity: &FieldIdentity,
        _index: usize,
        _depth: usize,
    ) -> Result<(), WalkError> {
        self.counts.sequence_entries += 1;
        Ok(())
    }

    fn on_structural_error(&mut self, _identity: &FieldIdentity, _detail: &str, _depth: usize) {
        self.counts.structural_errors += 1;
    }
}

impl MessageConsumer for MessageCounter {
    /// Counts one message. A traversal failure is logged with the message
    /// number and the run continues.
    fn consume(&mut self, message: &Message) -> bool {
        self.counts.messages += 1;
        if let Err(err) = walk(message, self) {
            error!(message = self.counts.messages, "count failed: {}", err);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastwire_message::{Field, FieldSet, MessageBuilder};

    #[test]
    fn test_market_data_scenario() {
        // One UInt32, one ASCII string, one Decimal; nothing nested.
        let message = MessageBuilder::new()
            .field("MDUpdateAction", Field::UInt32(2))
            .field("MDEntryType", Field::Ascii("0".to_string()))
            .field("MDEntryPx", Field::Decimal(Decimal::new(196875, -5)))
            .build()
            .unwrap();
        let mut counter = MessageCounter::new();
        assert!(counter.consume(&message));
        let counts = counter.counts();
        assert_eq!(counts.uint32, 1);
        assert_eq!(counts.ascii, 1);
        assert_eq!(counts.decimal, 1);
        assert_eq!(counts.sequences, 0);
        assert_eq!(counts.groups, 0);
        assert_eq!(counts.messages, 1);
        assert_eq!(counts.scalar_total(), message.len());
    }

    #[test]
    fn test_nested_sequence_scenario() {
        // A sequence wrapping two entries, one Int32 each.
        let mut sequence = Sequence::new(FieldIdentity::new("NoMDEntries"));
        for value in [1i32, 2] {
            let mut entry = FieldSet::new();
            entry
                .add_field(FieldIdentity::new("MDEntrySize"), Field::Int32(value))
                .unwrap();
            sequence.add_entry(entry);
        }
        let message = MessageBuilder::new()
            .field("MDEntries", Field::Sequence(sequence))
            .build()
            .unwrap();
        let mut counter = MessageCounter::new();
        counter.consume(&message);
        let counts = counter.counts();
        assert_eq!(counts.sequences, 1);
        assert_eq!(counts.sequence_entries, 2);
        assert_eq!(counts.int32, 2);
        assert_eq!(counts.scalar_total(), 2);
    }

    #[test]
    fn test_counts_accumulate_across_messages() {
        let message = MessageBuilder::new()
            .field("A", Field::Int64(1))
            .field("B", Field::UInt64(2))
            .build()
            .unwrap();
        let mut counter = MessageCounter::new();
        counter.consume(&message);
        counter.consume(&message);
        let counts = counter.counts();
        assert_eq!(counts.messages, 2);
        assert_eq!(counts.int64, 2);
        assert_eq!(counts.uint64, 2);
    }

    #[test]
    fn test_flat_scalar_total_matches_len() {
        let message = MessageBuilder::new()
            .field("A", Field::Int32(1))
            .field("B", Field::Utf8("üü".to_string()))
            .field("C", Field::ByteVector(bytes::Bytes::from_static(b"\x01")))
            .build()
            .unwrap();
        let mut counter = MessageCounter::new();
        counter.consume(&message);
        assert_eq!(counter.counts().scalar_total(), message.len());
    }
}
