//! Common utilities shared across examples.

#![allow(dead_code)]

use fastwire_core::{Decimal, FieldIdentity, LogLevel};
use fastwire_engine::SourceEvent;
use fastwire_message::{Field, FieldSet, MessageBuilder, Sequence};
use std::env;

/// Example configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ExampleConfig {
    /// How many messages the synthetic feed produces.
    pub feed_size: usize,
    /// Stop after this many records (0 = all).
    pub limit: usize,
    /// Reset decoder state before every message.
    pub reset_on_message: bool,
}

impl ExampleConfig {
    /// Reads `FASTWIRE_FEED`, `FASTWIRE_LIMIT`, and `FASTWIRE_RESET`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            feed_size: env::var("FASTWIRE_FEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            limit: env::var("FASTWIRE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            reset_on_message: env::var("FASTWIRE_RESET").is_ok(),
        }
    }
}

/// Initializes logging for examples.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Builds a synthetic incremental-refresh feed.
///
/// Stands in for the external decoder: each message carries a sequence
/// number, an update action, and a repeating group of price entries, plus an
/// occasional decoder log line.
#[must_use]
pub fn synthetic_feed(messages: usize) -> Vec<SourceEvent> {
    let mut events = Vec::with_capacity(messages + 1);
    for seq in 1..=messages as u32 {
        let mut entries = Sequence::new(FieldIdentity::new("NoMDEntries").with_id("268"));
        for (i, offset) in [0i64, 25, 50].iter().enumerate() {
            // Entries are built the way a decoder would: pre-sized for the
            // template's entry layout, fields added in declaration order.
            let mut entry = FieldSet::with_capacity(3);
            entry
                .add_field(
                    FieldIdentity::new("MDEntryType").with_id("269"),
                    Field::Ascii(if i == 0 { "0" } else { "1" }.to_string()),
                )
                .expect("entry identities are unique");
            entry
                .add_field(
                    FieldIdentity::new("MDEntryPx").with_id("270"),
                    Field::Decimal(Decimal::new(196_875 + i64::from(seq) * 5 + offset, -5)),
                )
                .expect("entry identities are unique");
            entry
                .add_field(
                    FieldIdentity::new("MDEntrySize").with_id("271"),
                    Field::UInt32(100 * (i as u32 + 1)),
                )
                .expect("entry identities are unique");
            entries.add_entry(entry);
        }
        let message = MessageBuilder::new()
            .identified_field(
                FieldIdentity::new("MsgSeqNum").with_id("34"),
                Field::UInt32(seq),
            )
            .identified_field(
                FieldIdentity::new("MDUpdateAction").with_id("279"),
                Field::UInt32(seq % 3),
            )
            .identified_field(
                FieldIdentity::new("MDEntries").with_id("268"),
                Field::Sequence(entries),
            )
            .application_type("MDIncRefresh", "")
            .build()
            .expect("message identities are unique");
        events.push(SourceEvent::Message(message));
        if seq % 4 == 0 {
            events.push(SourceEvent::Log(
                LogLevel::Info,
                format!("template 30 reused at message {}", seq),
            ));
        }
    }
    events
}
