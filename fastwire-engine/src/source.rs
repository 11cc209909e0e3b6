/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! The black-box decoder contract.
//!
//! The wire-level FAST codec (templates, presence maps, field operators) is
//! external to this workspace. The engine sees it only as a source of
//! events: decoded messages, log lines, and error reports, delivered one at
//! a time until end of data.

use fastwire_core::LogLevel;
use fastwire_message::Message;

/// One event produced by the external decoder.
#[derive(Debug, Clone)]
pub enum SourceEvent {
    /// A fully decoded message, ownership transferred to the receiver.
    Message(Message),
    /// A diagnostic log line.
    Log(LogLevel, String),
    /// A decoding failure description.
    DecodingError(String),
    /// A communication failure description.
    CommunicationError(String),
}

/// Produces decoder events for the synchronous driver.
pub trait MessageSource {
    /// Pulls the next event, or `None` at end of data.
    fn next_event(&mut self) -> Option<SourceEvent>;

    /// Resets decoder state, as some datagram-per-message streams require
    /// before every message. The default is a no-op.
    fn reset(&mut self) {}
}

/// In-memory source over a pre-built list of events.
///
/// Used by tests and demos in place of a live decoder.
#[derive(Debug, Default)]
pub struct VecMessageSource {
    events: std::vec::IntoIter<SourceEvent>,
    resets: usize,
}

impl VecMessageSource {
    /// Creates a source that yields the given events in order.
    #[must_use]
    pub fn new(events: Vec<SourceEvent>) -> Self {
        Self {
            events: events.into_iter(),
            resets: 0,
        }
    }

    /// Creates a source that yields the given messages in order.
    #[must_use]
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self::new(messages.into_iter().map(SourceEvent::Message).collect())
    }

    /// Returns how many times the driver asked for a reset.
    #[must_use]
    pub const fn reset_count(&self) -> usize {
        self.resets
    }
}

impl MessageSource for VecMessageSource {
    fn next_event(&mut self) -> Option<SourceEvent> {
        self.events.next()
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}
