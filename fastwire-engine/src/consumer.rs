/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Consumer callback interface.
//!
//! The external decoder invokes these callbacks synchronously, one message
//! at a time. Every boolean return is the consumer's keep-running policy:
//! `true` continues the decode loop, `false` stops it. The driver honors
//! these verdicts and never overrides them.

use fastwire_core::LogLevel;
use fastwire_message::Message;
use tracing::{error, warn};

/// Interface implemented by a consumer of decoded messages.
///
/// The delivered message is valid only for the duration of the
/// [`consume`](Self::consume) call; a consumer that needs values afterwards
/// must extract them during the call.
pub trait MessageConsumer {
    /// Accepts one decoded message.
    ///
    /// # Returns
    /// `true` if decoding should continue; `false` to stop.
    fn consume(&mut self, message: &Message) -> bool;

    /// Does this consumer wish to see log messages at the given level?
    ///
    /// The default accepts warnings and worse.
    fn want_log(&self, level: LogLevel) -> bool {
        level <= LogLevel::Warning
    }

    /// Reports an interesting event from the decoder.
    ///
    /// # Returns
    /// `true` if decoding should continue; `false` to stop.
    fn log(&mut self, level: LogLevel, text: &str) -> bool {
        warn!(level = %level, "{}", text);
        true
    }

    /// Reports an error during the decoding process.
    ///
    /// Return `false` unless a recovery mechanism exists to resynchronize
    /// decoding with the input stream.
    fn decoding_error(&mut self, text: &str) -> bool {
        error!("decoding error: {}", text);
        false
    }

    /// Reports a communication error.
    ///
    /// A `true` return attempts to continue, but recovery is not guaranteed.
    fn communication_error(&mut self, text: &str) -> bool {
        error!("communication error: {}", text);
        false
    }

    /// Notifies the consumer that decoding has stopped.
    ///
    /// No `consume` calls are generated after this call.
    fn decoding_stopped(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Accepting;

    impl MessageConsumer for Accepting {
        fn consume(&mut self, _message: &Message) -> bool {
            true
        }
    }

    #[test]
    fn test_default_log_filter() {
        let consumer = Accepting;
        assert!(consumer.want_log(LogLevel::Fatal));
        assert!(consumer.want_log(LogLevel::Warning));
        assert!(!consumer.want_log(LogLevel::Info));
        assert!(!consumer.want_log(LogLevel::Verbose));
    }

    #[test]
    fn test_default_error_policy() {
        let mut consumer = Accepting;
        assert!(consumer.log(LogLevel::Warning, "odd pmap"));
        assert!(!consumer.decoding_error("bad template id"));
        assert!(!consumer.communication_error("socket closed"));
    }
}
