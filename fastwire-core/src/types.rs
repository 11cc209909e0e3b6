/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Shared tag and severity enumerations.
//!
//! [`ValueKind`] is the closed set of field-type tags carried by a decoded
//! field. It is deliberately not extensible: every consumer dispatches with
//! an exhaustive match, so adding a kind is a breaking change to all of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a decoded field payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// Exact scaled decimal.
    Decimal,
    /// ASCII string.
    Ascii,
    /// UTF-8 string.
    Utf8,
    /// Opaque byte vector.
    ByteVector,
    /// Repeating group: an ordered list of field-set entries.
    Sequence,
    /// Fixed nested field set embedded as a single field.
    Group,
}

impl ValueKind {
    /// Returns the canonical name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Decimal => "Decimal",
            Self::Ascii => "Ascii",
            Self::Utf8 => "Utf8",
            Self::ByteVector => "ByteVector",
            Self::Sequence => "Sequence",
            Self::Group => "Group",
        }
    }

    /// Returns true for leaf kinds, false for [`Sequence`](Self::Sequence)
    /// and [`Group`](Self::Group).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Sequence | Self::Group)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Importance of a decoder log message. Low values are more important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Unrecoverable condition.
    Fatal = 0,
    /// Serious problem, decoding may not continue.
    Serious = 1,
    /// Suspicious condition, decoding continues.
    Warning = 2,
    /// Progress information.
    Info = 3,
    /// Detailed tracing.
    Verbose = 4,
}

impl LogLevel {
    /// Returns the display name of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Serious => "SERIOUS",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
