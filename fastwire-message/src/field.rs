/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! The decoded field value, a closed tagged variant.
//!
//! Exactly one of the ten payload forms is populated per instance, and the
//! set is closed: adding a kind is a breaking change to every consumer's
//! dispatch. Accessing a payload as the wrong variant is an error, never a
//! coercion.

use crate::field_set::FieldSet;
use crate::sequence::Sequence;
use bytes::Bytes;
use fastwire_core::{Decimal, ModelError, ValueKind};
use std::fmt;

/// A decoded field value. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// Exact scaled decimal.
    Decimal(Decimal),
    /// ASCII string.
    Ascii(String),
    /// UTF-8 string.
    Utf8(String),
    /// Opaque byte vector.
    ByteVector(Bytes),
    /// Repeating group.
    Sequence(Sequence),
    /// Fixed nested field set.
    Group(Box<FieldSet>),
}

impl Field {
    /// Returns the type tag of this field.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int32(_) => ValueKind::Int32,
            Self::UInt32(_) => ValueKind::UInt32,
            Self::Int64(_) => ValueKind::Int64,
            Self::UInt64(_) => ValueKind::UInt64,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Ascii(_) => ValueKind::Ascii,
            Self::Utf8(_) => ValueKind::Utf8,
            Self::ByteVector(_) => ValueKind::ByteVector,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Group(_) => ValueKind::Group,
        }
    }

    /// Returns true for leaf payloads.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    fn mismatch(&self, expected: ValueKind) -> ModelError {
        ModelError::VariantMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// Returns the payload as an `i32`.
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not an Int32 field.
    pub fn to_int32(&self) -> Result<i32, ModelError> {
        match self {
            Self::Int32(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::Int32)),
        }
    }

    /// Returns the payload as a `u32`.
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not a UInt32 field.
    pub fn to_uint32(&self) -> Result<u32, ModelError> {
        match self {
            Self::UInt32(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::UInt32)),
        }
    }

    /// Returns the payload as an `i64`.
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not an Int64 field.
    pub fn to_int64(&self) -> Result<i64, ModelError> {
        match self {
            Self::Int64(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::Int64)),
        }
    }

    /// Returns the payload as a `u64`.
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not a UInt64 field.
    pub fn to_uint64(&self) -> Result<u64, ModelError> {
        match self {
            Self::UInt64(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::UInt64)),
        }
    }

    /// Returns the payload as a [`Decimal`].
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not a Decimal field.
    pub fn to_decimal(&self) -> Result<Decimal, ModelError> {
        match self {
            Self::Decimal(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::Decimal)),
        }
    }

    /// Returns the payload as an ASCII string slice.
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not an Ascii field.
    pub fn as_ascii(&self) -> Result<&str, ModelError> {
        match self {
            Self::Ascii(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::Ascii)),
        }
    }

    /// Returns the payload as a UTF-8 string slice.
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not a Utf8 field.
    pub fn as_utf8(&self) -> Result<&str, ModelError> {
        match self {
            Self::Utf8(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::Utf8)),
        }
    }

    /// Returns the payload as raw bytes.
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not a ByteVector field.
    pub fn as_byte_vector(&self) -> Result<&[u8], ModelError> {
        match self {
            Self::ByteVector(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::ByteVector)),
        }
    }

    /// Returns the nested [`Sequence`].
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not a Sequence field.
    pub fn as_sequence(&self) -> Result<&Sequence, ModelError> {
        match self {
            Self::Sequence(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::Sequence)),
        }
    }

    /// Returns the nested group [`FieldSet`].
    ///
    /// # Errors
    /// Returns `ModelError::VariantMismatch` if this is not a Group field.
    pub fn as_group(&self) -> Result<&FieldSet, ModelError> {
        match self {
            Self::Group(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::Group)),
        }
    }
}

impl fmt::Display for Field {
    /// Renders scalar payloads for interpreted output. Byte vectors render
    /// as hex; structure fields render as their kind name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::UInt64(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Ascii(v) => f.write_str(v),
            Self::Utf8(v) => f.write_str(v),
            Self::ByteVector(v) => {
                for byte in v.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Self::Sequence(_) => f.write_str("sequence"),
            Self::Group(_) => f.write_str("group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastwire_core::FieldIdentity;

    #[test]
    fn test_kind_per_variant() {
        assert_eq!(Field::Int32(-5).kind(), ValueKind::Int32);
        assert_eq!(Field::UInt64(5).kind(), ValueKind::UInt64);
        assert_eq!(
            Field::Decimal(Decimal::new(1, 0)).kind(),
            ValueKind::Decimal
        );
        assert_eq!(Field::Group(Box::new(FieldSet::new())).kind(), ValueKind::Group);
        assert!(Field::Ascii("x".to_string()).is_scalar());
        assert!(!Field::Group(Box::new(FieldSet::new())).is_scalar());
    }

    #[test]
    fn test_checked_access() {
        let field = Field::UInt32(2);
        assert_eq!(field.to_uint32().unwrap(), 2);
        let err = field.to_int32().unwrap_err();
        assert_eq!(
            err,
            ModelError::VariantMismatch {
                expected: ValueKind::Int32,
                actual: ValueKind::UInt32,
            }
        );
    }

    #[test]
    fn test_structure_access() {
        let seq = Sequence::new(FieldIdentity::new("NoMDEntries"));
        let field = Field::Sequence(seq);
        assert!(field.as_sequence().is_ok());
        assert!(field.as_group().is_err());
        assert!(field.to_decimal().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Field::Int32(-7).to_string(), "-7");
        assert_eq!(Field::Ascii("EUR/USD".to_string()).to_string(), "EUR/USD");
        assert_eq!(
            Field::Decimal(Decimal::new(196875, -5)).to_string(),
            "1.96875"
        );
        assert_eq!(
            Field::ByteVector(Bytes::from_static(&[0xDE, 0xAD])).to_string(),
            "dead"
        );
    }
}
