/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Field identification within a field set.
//!
//! Keeping a field's identity separate from its type and value lets immutable
//! fields be shared among containers (messages, dictionaries, builders).
//! Identity ids come from the external template registry and are kept as
//! strings, matching the template schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a field within a [FieldSet](https://docs.rs/fastwire-message).
///
/// Equality, ordering, and hashing are purely structural over the namespace,
/// local name, and id. Two identities with the same name but different ids
/// are different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldIdentity {
    local_name: String,
    namespace: String,
    id: String,
}

impl FieldIdentity {
    /// Creates an identity with an empty namespace and no id.
    ///
    /// Used for structural identities such as a sequence's governing length
    /// field when the template does not assign one.
    #[must_use]
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            namespace: String::new(),
            id: String::new(),
        }
    }

    /// Creates an identity qualified by a namespace.
    #[must_use]
    pub fn qualified(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            namespace: namespace.into(),
            id: String::new(),
        }
    }

    /// Sets the numeric field id from the template.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the unqualified name.
    #[inline]
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace, empty when unqualified.
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the field id, empty when the template assigns none.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the name qualified by the namespace (`ns::name`), or the
    /// local name alone when the namespace is empty.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.local_name.clone()
        } else {
            format!("{}::{}", self.namespace, self.local_name)
        }
    }

    /// Returns true if this identity matches a namespace + local name pair.
    #[must_use]
    pub fn matches_qualified(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace == namespace && self.local_name == local_name
    }
}

impl fmt::Display for FieldIdentity {
    /// Formats as `name[id]`, the label used in interpreted output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}[{}]", self.local_name, self.id)
        } else {
            write!(f, "{}::{}[{}]", self.namespace, self.local_name, self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified_identity() {
        let id = FieldIdentity::new("MDEntryPx");
        assert_eq!(id.local_name(), "MDEntryPx");
        assert_eq!(id.namespace(), "");
        assert_eq!(id.id(), "");
        assert_eq!(id.qualified_name(), "MDEntryPx");
    }

    #[test]
    fn test_qualified_identity() {
        let id = FieldIdentity::qualified("md", "MDEntryPx").with_id("270");
        assert_eq!(id.qualified_name(), "md::MDEntryPx");
        assert_eq!(id.id(), "270");
        assert!(id.matches_qualified("md", "MDEntryPx"));
        assert!(!id.matches_qualified("", "MDEntryPx"));
    }

    #[test]
    fn test_structural_equality() {
        let a = FieldIdentity::new("Symbol").with_id("55");
        let b = FieldIdentity::new("Symbol").with_id("55");
        let c = FieldIdentity::new("Symbol").with_id("48");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, FieldIdentity::qualified("ns", "Symbol").with_id("55"));
    }

    #[test]
    fn test_display() {
        let id = FieldIdentity::new("MDUpdateAction").with_id("279");
        assert_eq!(id.to_string(), "MDUpdateAction[279]");
    }
}
