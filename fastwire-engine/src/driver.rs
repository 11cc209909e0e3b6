/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Synchronous (blocking) decode loop.
//!
//! The driver pulls one event at a time from the source, hands it to the
//! consumer, and waits for the boolean verdict before pulling the next.
//! Per-message consumer failures never abort the run; only a `false` verdict
//! or end of data does.

use crate::config::DriverConfig;
use crate::consumer::MessageConsumer;
use crate::source::{MessageSource, SourceEvent};
use tracing::debug;

/// Drives a [`MessageSource`] into a [`MessageConsumer`].
#[derive(Debug)]
pub struct SynchronousDriver {
    limit: usize,
    reset_on_message: bool,
    message_count: usize,
}

impl SynchronousDriver {
    /// Creates a driver with no message limit and no per-message reset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: 0,
            reset_on_message: false,
            message_count: 0,
        }
    }

    /// Creates a driver configured from a validated [`DriverConfig`].
    #[must_use]
    pub const fn from_config(config: &DriverConfig) -> Self {
        Self {
            limit: config.limit(),
            reset_on_message: config.reset_on_message(),
            message_count: 0,
        }
    }

    /// Sets an upper limit on the number of messages to deliver.
    /// Zero means unlimited.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets whether the source is reset before each message.
    #[must_use]
    pub const fn with_reset_on_message(mut self, reset: bool) -> Self {
        self.reset_on_message = reset;
        self
    }

    /// Returns how many messages have been delivered so far.
    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.message_count
    }

    /// Runs until end of data, the message limit, or a `false` verdict from
    /// the consumer. `decoding_stopped` fires exactly once on every exit
    /// path.
    ///
    /// # Returns
    /// The number of messages delivered.
    pub fn run<S, C>(&mut self, source: &mut S, consumer: &mut C) -> usize
    where
        S: MessageSource,
        C: MessageConsumer,
    {
        loop {
            if self.limit != 0 && self.message_count >= self.limit {
                debug!(limit = self.limit, "message limit reached");
                break;
            }
            if self.reset_on_message {
                source.reset();
            }
            let Some(event) = source.next_event() else {
                debug!("end of data");
                break;
            };
            let keep_going = match event {
                SourceEvent::Message(message) => {
                    self.message_count += 1;
                    consumer.consume(&message)
                }
                SourceEvent::Log(level, text) => {
                    if consumer.want_log(level) {
                        consumer.log(level, &text)
                    } else {
                        true
                    }
                }
                SourceEvent::DecodingError(text) => consumer.decoding_error(&text),
                SourceEvent::CommunicationError(text) => consumer.communication_error(&text),
            };
            if !keep_going {
                debug!(messages = self.message_count, "consumer stopped the run");
                break;
            }
        }
        consumer.decoding_stopped();
        self.message_count
    }
}

impl Default for SynchronousDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::VecMessageSource;
    use fastwire_core::LogLevel;
    use fastwire_message::{FieldSet, Message};

    /// Consumer that stops after a fixed number of messages and records
    /// everything it sees.
    #[derive(Default)]
    struct Recorder {
        stop_after: usize,
        consumed: usize,
        logs: Vec<(LogLevel, String)>,
        decoding_errors: Vec<String>,
        continue_on_error: bool,
        stopped: usize,
    }

    impl MessageConsumer for Recorder {
        fn consume(&mut self, _message: &Message) -> bool {
            self.consumed += 1;
            self.stop_after == 0 || self.consumed < self.stop_after
        }

        fn log(&mut self, level: LogLevel, text: &str) -> bool {
            self.logs.push((level, text.to_string()));
            true
        }

        fn decoding_error(&mut self, text: &str) -> bool {
            self.decoding_errors.push(text.to_string());
            self.continue_on_error
        }

        fn decoding_stopped(&mut self) {
            self.stopped += 1;
        }
    }

    fn messages(n: usize) -> Vec<Message> {
        (0..n).map(|_| FieldSet::new()).collect()
    }

    #[test]
    fn test_runs_to_end_of_data() {
        let mut source = VecMessageSource::from_messages(messages(5));
        let mut consumer = Recorder::default();
        let delivered = SynchronousDriver::new().run(&mut source, &mut consumer);
        assert_eq!(delivered, 5);
        assert_eq!(consumer.consumed, 5);
        assert_eq!(consumer.stopped, 1);
    }

    #[test]
    fn test_false_verdict_stops_delivery() {
        // Consumer says stop after message #3 of 10; #4 is never delivered.
        let mut source = VecMessageSource::from_messages(messages(10));
        let mut consumer = Recorder {
            stop_after: 3,
            ..Recorder::default()
        };
        let delivered = SynchronousDriver::new().run(&mut source, &mut consumer);
        assert_eq!(delivered, 3);
        assert_eq!(consumer.consumed, 3);
        assert_eq!(consumer.stopped, 1);
    }

    #[test]
    fn test_message_limit() {
        let mut source = VecMessageSource::from_messages(messages(10));
        let mut consumer = Recorder::default();
        let delivered = SynchronousDriver::new()
            .with_limit(4)
            .run(&mut source, &mut consumer);
        assert_eq!(delivered, 4);
        assert_eq!(consumer.stopped, 1);
    }

    #[test]
    fn test_reset_on_message() {
        let mut source = VecMessageSource::from_messages(messages(3));
        let mut consumer = Recorder::default();
        SynchronousDriver::new()
            .with_reset_on_message(true)
            .run(&mut source, &mut consumer);
        // One reset per pull, including the final end-of-data pull.
        assert_eq!(source.reset_count(), 4);
    }

    #[test]
    fn test_from_config_maps_settings() {
        let config = DriverConfig::new().with_limit(2).with_reset_on_message(true);
        let mut source = VecMessageSource::from_messages(messages(5));
        let mut consumer = Recorder::default();
        let delivered = SynchronousDriver::from_config(&config).run(&mut source, &mut consumer);
        // Limit stops delivery at 2; reset fired once per message pull.
        assert_eq!(delivered, 2);
        assert_eq!(consumer.consumed, 2);
        assert_eq!(source.reset_count(), 2);
    }

    #[test]
    fn test_decoding_error_policy_honored() {
        let events = vec![
            SourceEvent::Message(FieldSet::new()),
            SourceEvent::DecodingError("bad template".to_string()),
            SourceEvent::Message(FieldSet::new()),
        ];

        // Default policy: stop on decoding error.
        let mut source = VecMessageSource::new(events.clone());
        let mut halting = Recorder::default();
        let delivered = SynchronousDriver::new().run(&mut source, &mut halting);
        assert_eq!(delivered, 1);
        assert_eq!(halting.decoding_errors.len(), 1);

        // Lenient policy: report and continue.
        let mut source = VecMessageSource::new(events);
        let mut lenient = Recorder {
            continue_on_error: true,
            ..Recorder::default()
        };
        let delivered = SynchronousDriver::new().run(&mut source, &mut lenient);
        assert_eq!(delivered, 2);
    }

    #[test]
    fn test_log_routing_respects_want_log() {
        let events = vec![
            SourceEvent::Log(LogLevel::Verbose, "noise".to_string()),
            SourceEvent::Log(LogLevel::Warning, "odd pmap".to_string()),
        ];
        let mut source = VecMessageSource::new(events);
        let mut consumer = Recorder::default();
        SynchronousDriver::new().run(&mut source, &mut consumer);
        // Default want_log admits Warning and worse only.
        assert_eq!(consumer.logs.len(), 1);
        assert_eq!(consumer.logs[0].0, LogLevel::Warning);
    }
}
