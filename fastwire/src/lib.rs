/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! # Fastwire
//!
//! In-memory representation of decoded FAST (FIX Adapted for STreaming)
//! messages, and the recursive dispatch protocol consumers use to walk the
//! decoded tree.
//!
//! The wire-level codec (templates, presence maps, stop-bit encoding, field
//! operators) is an external decoder engine treated as a black box: the core
//! receives a populated message tree through a delivery callback and exposes
//! the tree's structure to generic traversal code.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastwire::prelude::*;
//!
//! let message = MessageBuilder::new()
//!     .field("MDUpdateAction", Field::UInt32(2))
//!     .field("MDEntryPx", Field::Decimal(Decimal::new(196875, -5)))
//!     .build()
//!     .unwrap();
//!
//! let mut source = VecMessageSource::from_messages(vec![message]);
//! let mut interpreter = MessageInterpreter::new(Vec::new());
//! let delivered = SynchronousDriver::new().run(&mut source, &mut interpreter);
//! assert_eq!(delivered, 1);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: identities, decimals, type tags, and error definitions
//! - [`message`]: the decoded field tree
//! - [`interpret`]: the generic traversal skeleton and its consumers
//! - [`engine`]: the delivery boundary and synchronous decode driver

pub mod core {
    //! Identities, decimals, type tags, and error definitions.
    pub use fastwire_core::*;
}

pub mod message {
    //! The decoded field tree: fields, field sets, and sequences.
    pub use fastwire_message::*;
}

pub mod interpret {
    //! Generic traversal and the consumers built on it.
    pub use fastwire_interpret::*;
}

pub mod engine {
    //! Delivery boundary and synchronous decode driver.
    pub use fastwire_engine::*;
}

/// Commonly used types, re-exported for convenience.
pub mod prelude {
    pub use fastwire_core::{
        ConfigError, Decimal, FastWireError, FieldIdentity, LogLevel, ModelError, Result,
        ValueKind, WalkError,
    };
    pub use fastwire_engine::{
        DriverConfig, MessageConsumer, MessageSource, SourceEvent, SynchronousDriver,
        VecMessageSource,
    };
    pub use fastwire_interpret::{
        walk, MessageCounter, MessageInterpreter, MessageVisitor, NullConsumer, TypeCounts,
    };
    pub use fastwire_message::{
        Field, FieldSet, Message, MessageBuilder, MessageField, Sequence,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_end_to_end_counting() {
        let mut sequence = Sequence::new(FieldIdentity::new("NoMDEntries").with_id("268"));
        for px in [Decimal::new(196875, -5), Decimal::new(196900, -5)] {
            let entry = MessageBuilder::new()
                .field("MDEntryPx", Field::Decimal(px))
                .build()
                .unwrap();
            sequence.add_entry(entry);
        }
        let message = MessageBuilder::new()
            .field("MsgSeqNum", Field::UInt32(1))
            .field("MDEntries", Field::Sequence(sequence))
            .build()
            .unwrap();

        let mut source = VecMessageSource::from_messages(vec![message.clone(), message]);
        let mut counter = MessageCounter::new();
        let delivered = SynchronousDriver::new().run(&mut source, &mut counter);

        assert_eq!(delivered, 2);
        let counts = counter.counts();
        assert_eq!(counts.messages, 2);
        assert_eq!(counts.sequences, 2);
        assert_eq!(counts.sequence_entries, 4);
        assert_eq!(counts.decimal, 4);
        assert_eq!(counts.uint32, 2);
    }
}
