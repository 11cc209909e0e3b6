/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Repeating groups.
//!
//! A sequence is an ordered list of [`FieldSet`] entries, each conforming to
//! the same template-declared entry layout, plus the identity of the length
//! field that governed it on the wire. The entry count is authoritative; the
//! length identity is metadata for display.

use crate::field_set::FieldSet;
use fastwire_core::FieldIdentity;

/// A repeating group of field-set entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    length_identity: FieldIdentity,
    entries: Vec<FieldSet>,
}

impl Sequence {
    /// Creates an empty sequence governed by the given length field.
    #[must_use]
    pub const fn new(length_identity: FieldIdentity) -> Self {
        Self {
            length_identity,
            entries: Vec::new(),
        }
    }

    /// Creates an empty sequence sized for the decoded entry count.
    #[must_use]
    pub fn with_capacity(length_identity: FieldIdentity, capacity: usize) -> Self {
        Self {
            length_identity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the identity of the sequence's governing length field.
    #[inline]
    #[must_use]
    pub const fn length_identity(&self) -> &FieldIdentity {
        &self.length_identity
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the sequence has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry. Construction-time use only.
    pub fn add_entry(&mut self, entry: FieldSet) {
        self.entries.push(entry);
    }

    /// Returns the entry at the given position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldSet> {
        self.entries.get(index)
    }

    /// Iterates over entries in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSet> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a FieldSet;
    type IntoIter = std::slice::Iter<'a, FieldSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
