/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Human-readable message formatting.
//!
//! Produces one `Record #N` block per delivered message: scalars inline as
//! ` name[id]=value`, sequences on their own indented lines with entries
//! numbered `[0]`, `[1]`, ..., groups recursing one indent level deeper.
//! Indentation is two spaces per depth level.

use crate::visitor::MessageVisitor;
use crate::walk::walk;
use fastwire_core::{Decimal, FieldIdentity, WalkError};
use fastwire_engine::MessageConsumer;
use fastwire_message::{Message, Sequence};
use std::io::Write;
use tracing::error;

/// Formats decoded messages onto any writer.
#[derive(Debug)]
pub struct MessageInterpreter<W: Write> {
    out: W,
    record_count: usize,
    record_limit: usize,
    error_count: usize,
}

impl<W: Write> MessageInterpreter<W> {
    /// Creates an interpreter writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            record_count: 0,
            record_limit: 0,
            error_count: 0,
        }
    }

    /// Stops the run after this many records. Zero means all.
    #[must_use]
    pub const fn with_record_limit(mut self, limit: usize) -> Self {
        self.record_limit = limit;
        self
    }

    /// Returns how many records have been formatted.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.record_count
    }

    /// Returns how many per-message failures were logged and skipped.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    /// Consumes the interpreter, returning the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn newline(&mut self, depth: usize) -> Result<(), WalkError> {
        write!(self.out, "\n{:indent$}", "", indent = depth * 2)?;
        Ok(())
    }

    fn format_message(&mut self, message: &Message) -> Result<(), WalkError> {
        write!(self.out, "Record #{}", self.record_count)?;
        walk(message, self)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> MessageVisitor for MessageInterpreter<W> {
    fn on_int32(
        &mut self,
        identity: &FieldIdentity,
        value: i32,
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}={}", identity, value)?;
        Ok(())
    }

    fn on_uint32(
        &mut self,
        identity: &FieldIdentity,
        value: u32,
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}={}", identity, value)?;
        Ok(())
    }

    fn on_int64(
        &mut self,
        identity: &FieldIdentity,
        value: i64,
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}={}", identity, value)?;
        Ok(())
    }

    fn on_uint64(
        &mut self,
        identity: &FieldIdentity,
        value: u64,
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}={}", identity, value)?;
        Ok(())
    }

    fn on_decimal(
        &mut self,
        identity: &FieldIdentity,
        value: Decimal,
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}={}", identity, value)?;
        Ok(())
    }

    fn on_ascii(
        &mut self,
        identity: &FieldIdentity,
        value: &str,
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}={}", identity, value)?;
        Ok(())
    }

    fn on_utf8(
        &mut self,
        identity: &FieldIdentity,
        value: &str,
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}={}", identity, value)?;
        Ok(())
    }

    fn on_byte_vector(
        &mut self,
        identity: &FieldIdentity,
        value: &[u8],
        _depth: usize,
    ) -> Result<(), WalkError> {
        write!(self.out, " {}=", identity)?;
        for byte in value {
            write!(self.out, "{:02x}", byte)?;
        }
        Ok(())
    }

    fn enter_group(&mut self, identity: &FieldIdentity, depth: usize) -> Result<(), WalkError> {
        self.newline(depth)?;
        write!(self.out, " {}=Group", identity)?;
        Ok(())
    }

    fn leave_group(&mut self, _identity: &FieldIdentity, depth: usize) -> Result<(), WalkError> {
        self.newline(depth)
    }

    fn enter_sequence(
        &mut self,
        identity: &FieldIdentity,
        sequence: &Sequence,
        depth: usize,
    ) -> Result<(), WalkError> {
        self.newline(depth)?;
        write!(self.out, " {}=Sequence[{}]", identity, sequence.len())?;
        Ok(())
    }

    fn enter_sequence_entry(
        &mut self,
        _identity: &FieldIdentity,
        index: usize,
        depth: usize,
    ) -> Result<(), WalkError> {
        self.newline(depth)?;
        write!(self.out, "[{}]:", index)?;
        Ok(())
    }

    fn leave_sequence(
        &mut self,
        _identity: &FieldIdentity,
        _sequence: &Sequence,
        depth: usize,
    ) -> Result<(), WalkError> {
        self.newline(depth)
    }
}

impl<W: Write> MessageConsumer for MessageInterpreter<W> {
    /// Formats one record. A per-message failure is logged with the record
    /// number and skipped; it never stops the run by itself.
    fn consume(&mut self, message: &Message) -> bool {
        self.record_count += 1;
        if let Err(err) = self.format_message(message) {
            self.error_count += 1;
            error!(record = self.record_count, "interpret failed: {}", err);
        }
        self.record_limit == 0 || self.record_count < self.record_limit
    }

    fn decoding_stopped(&mut self) {
        let _ = writeln!(self.out, "End of data");
        let _ = self.out.flush();
    }
}

/// Silent display mode: counts records, formats nothing.
#[derive(Debug, Default)]
pub struct NullConsumer {
    record_count: usize,
    record_limit: usize,
}

impl NullConsumer {
    /// Creates a silent consumer with no record limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            record_count: 0,
            record_limit: 0,
        }
    }

    /// Stops the run after this many records. Zero means all.
    #[must_use]
    pub const fn with_record_limit(mut self, limit: usize) -> Self {
        self.record_limit = limit;
        self
    }

    /// Returns how many records were delivered.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.record_count
    }
}

impl MessageConsumer for NullConsumer {
    fn consume(&mut self, _message: &Message) -> bool {
        self.record_count += 1;
        self.record_limit == 0 || self.record_count < self.record_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastwire_message::{Field, FieldSet, MessageBuilder};

    fn identified(name: &str, id: &str) -> FieldIdentity {
        FieldIdentity::new(name).with_id(id)
    }

    fn interpret(message: &Message) -> String {
        let mut interpreter = MessageInterpreter::new(Vec::new());
        assert!(interpreter.consume(message));
        String::from_utf8(interpreter.into_inner()).unwrap()
    }

    #[test]
    fn test_flat_record() {
        let message = MessageBuilder::new()
            .identified_field(identified("MDUpdateAction", "279"), Field::UInt32(2))
            .identified_field(
                identified("MDEntryType", "269"),
                Field::Ascii("0".to_string()),
            )
            .identified_field(
                identified("MDEntryPx", "270"),
                Field::Decimal(Decimal::new(196875, -5)),
            )
            .build()
            .unwrap();
        assert_eq!(
            interpret(&message),
            "Record #1 MDUpdateAction[279]=2 MDEntryType[269]=0 MDEntryPx[270]=1.96875\n"
        );
    }

    #[test]
    fn test_sequence_record() {
        let mut sequence = Sequence::new(identified("NoMDEntries", "268"));
        for size in [7i32, 9] {
            let mut entry = FieldSet::new();
            entry
                .add_field(identified("MDEntrySize", "271"), Field::Int32(size))
                .unwrap();
            sequence.add_entry(entry);
        }
        let message = MessageBuilder::new()
            .identified_field(identified("MsgSeqNum", "34"), Field::UInt32(12))
            .identified_field(identified("MDEntries", "268"), Field::Sequence(sequence))
            .build()
            .unwrap();
        assert_eq!(
            interpret(&message),
            concat!(
                "Record #1 MsgSeqNum[34]=12\n",
                " MDEntries[268]=Sequence[2]\n",
                "  [0]: MDEntrySize[271]=7\n",
                "  [1]: MDEntrySize[271]=9\n",
                "\n",
            )
        );
    }

    #[test]
    fn test_group_record_indents() {
        let group = MessageBuilder::new()
            .identified_field(identified("Px", "44"), Field::Decimal(Decimal::new(5, -1)))
            .build()
            .unwrap();
        let message = MessageBuilder::new()
            .identified_field(identified("Instrument", ""), Field::Group(Box::new(group)))
            .build()
            .unwrap();
        assert_eq!(
            interpret(&message),
            "Record #1\n Instrument[]=Group Px[44]=0.5\n\n"
        );
    }

    #[test]
    fn test_record_limit_stops_run() {
        let mut interpreter = MessageInterpreter::new(Vec::new()).with_record_limit(2);
        let message = FieldSet::new();
        assert!(interpreter.consume(&message));
        assert!(!interpreter.consume(&message));
        assert_eq!(interpreter.record_count(), 2);
    }

    #[test]
    fn test_decoding_stopped_trailer() {
        let mut interpreter = MessageInterpreter::new(Vec::new());
        interpreter.decoding_stopped();
        assert_eq!(
            String::from_utf8(interpreter.into_inner()).unwrap(),
            "End of data\n"
        );
    }

    #[test]
    fn test_null_consumer_counts() {
        let mut silent = NullConsumer::new().with_record_limit(3);
        let message = FieldSet::new();
        assert!(silent.consume(&message));
        assert!(silent.consume(&message));
        assert!(!silent.consume(&message));
        assert_eq!(silent.record_count(), 3);
    }
}
