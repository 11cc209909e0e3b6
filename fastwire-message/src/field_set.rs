/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Insertion-ordered collection of identified fields.
//!
//! A [`FieldSet`] represents one message, one group occurrence, or one
//! sequence entry. Iteration order equals insertion order, which for decoded
//! messages equals the template-declared field order. Keys are unique; the
//! set is constructed once and read-only thereafter.

use crate::field::Field;
use fastwire_core::{FieldIdentity, ModelError};
use smallvec::SmallVec;

/// One identified field within a [`FieldSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct MessageField {
    identity: FieldIdentity,
    field: Field,
}

impl MessageField {
    /// Creates an identified field.
    #[must_use]
    pub const fn new(identity: FieldIdentity, field: Field) -> Self {
        Self { identity, field }
    }

    /// Returns the field's identity.
    #[inline]
    #[must_use]
    pub const fn identity(&self) -> &FieldIdentity {
        &self.identity
    }

    /// Returns the field's value.
    #[inline]
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }
}

/// Ordered identity→field mapping with unique keys.
///
/// Most decoded messages are small; the first 16 fields are stored in-line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSet {
    fields: SmallVec<[MessageField; 16]>,
    application_type: String,
    application_type_ns: String,
}

impl FieldSet {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty field set sized for the expected field count.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: SmallVec::with_capacity(capacity),
            application_type: String::new(),
            application_type_ns: String::new(),
        }
    }

    /// Returns the number of top-level fields.
    ///
    /// Group fields count as one field each; a sequence counts as one field
    /// regardless of its entry count.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the set holds no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Adds a field to the set.
    ///
    /// Construction-time use only; decoded messages are never mutated after
    /// delivery.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateIdentity` if the identity is already
    /// present. The set is unchanged on error.
    pub fn add_field(&mut self, identity: FieldIdentity, field: Field) -> Result<(), ModelError> {
        if self.fields.iter().any(|f| *f.identity() == identity) {
            return Err(ModelError::DuplicateIdentity {
                name: identity.qualified_name(),
            });
        }
        self.fields.push(MessageField::new(identity, field));
        Ok(())
    }

    /// Iterates over `(identity, field)` pairs in insertion order.
    ///
    /// Each call yields a fresh iterator; an in-flight iterator cannot be
    /// rewound.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldIdentity, &Field)> {
        self.fields.iter().map(|f| (f.identity(), f.field()))
    }

    /// Returns the field at the given insertion position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MessageField> {
        self.fields.get(index)
    }

    /// Finds the first field whose local name matches, in insertion order.
    ///
    /// Unqualified lookup tolerates ambiguity: when several namespaces
    /// declare the same local name, the earliest inserted wins.
    #[must_use]
    pub fn find_by_local_name(&self, local_name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.identity().local_name() == local_name)
            .map(MessageField::field)
    }

    /// Finds the field with an exact namespace + local name match.
    #[must_use]
    pub fn find_by_qualified_name(&self, namespace: &str, local_name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.identity().matches_qualified(namespace, local_name))
            .map(MessageField::field)
    }

    /// Returns true if a field with this identity is present.
    #[must_use]
    pub fn is_present(&self, identity: &FieldIdentity) -> bool {
        self.fields.iter().any(|f| f.identity() == identity)
    }

    /// Sets the application type declared by the template's typeref.
    pub fn set_application_type(&mut self, app_type: impl Into<String>, ns: impl Into<String>) {
        self.application_type = app_type.into();
        self.application_type_ns = ns.into();
    }

    /// Returns the application type declared by the template's typeref.
    #[must_use]
    pub fn application_type(&self) -> &str {
        &self.application_type
    }

    /// Returns the namespace of the application type.
    #[must_use]
    pub fn application_type_ns(&self) -> &str {
        &self.application_type_ns
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a MessageField;
    type IntoIter = std::slice::Iter<'a, MessageField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
