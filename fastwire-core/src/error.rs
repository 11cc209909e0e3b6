/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Error types for the fastwire FAST message engine.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all fastwire operations.

use crate::types::ValueKind;
use thiserror::Error;

/// Result type alias using [`FastWireError`] as the error type.
pub type Result<T> = std::result::Result<T, FastWireError>;

/// Top-level error type for all fastwire operations.
#[derive(Debug, Error)]
pub enum FastWireError {
    /// Error in the message data model.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Error during message traversal.
    #[error("walk error: {0}")]
    Walk(#[from] WalkError),

    /// Error in startup configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error from an underlying stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in the message data model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A field with this identity is already present in the field set.
    #[error("duplicate field identity: {name}")]
    DuplicateIdentity {
        /// Qualified name of the offending identity.
        name: String,
    },

    /// A field payload was accessed as the wrong variant.
    #[error("variant mismatch: expected {expected}, found {actual}")]
    VariantMismatch {
        /// The kind the caller asked for.
        expected: ValueKind,
        /// The kind actually stored in the field.
        actual: ValueKind,
    },
}

/// Errors during message tree traversal.
///
/// A [`WalkError::Structural`] aborts the current field only; the walker
/// logs it and continues with sibling fields. All other variants abort the
/// traversal of the current message.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A structure field appeared where the consumer expected a scalar,
    /// or vice versa.
    #[error("structural error: {detail}")]
    Structural {
        /// Description of the unexpected structure.
        detail: String,
    },

    /// The defensive recursion cap was exceeded.
    ///
    /// FAST templates cannot self-reference, so a conforming tree never
    /// reaches the cap.
    #[error("nesting depth {depth} exceeds limit {limit}")]
    DepthExceeded {
        /// Depth at which traversal stopped.
        depth: usize,
        /// The configured limit.
        limit: usize,
    },

    /// A typed payload access failed inside a visitor callback.
    #[error("variant error: {0}")]
    Variant(#[from] ModelError),

    /// Writing formatted output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in startup configuration.
///
/// These are fatal: they are reported once and the process exits non-zero.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No template file was configured.
    #[error("template file option is required")]
    MissingTemplateFile,

    /// No input file was configured.
    #[error("input file option is required")]
    MissingInputFile,

    /// A configured file could not be opened.
    #[error("can't open file {path}: {reason}")]
    UnreadableFile {
        /// Path that failed to open.
        path: String,
        /// Underlying reason.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::VariantMismatch {
            expected: ValueKind::Int32,
            actual: ValueKind::Sequence,
        };
        assert_eq!(
            err.to_string(),
            "variant mismatch: expected Int32, found Sequence"
        );
    }

    #[test]
    fn test_duplicate_identity_display() {
        let err = ModelError::DuplicateIdentity {
            name: "MDEntryPx".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate field identity: MDEntryPx");
    }

    #[test]
    fn test_walk_error_depth() {
        let err = WalkError::DepthExceeded {
            depth: 65,
            limit: 64,
        };
        assert_eq!(err.to_string(), "nesting depth 65 exceeds limit 64");
    }

    #[test]
    fn test_fastwire_error_from_model() {
        let model_err = ModelError::DuplicateIdentity {
            name: "x".to_string(),
        };
        let err: FastWireError = model_err.into();
        assert!(matches!(err, FastWireError::Model(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingTemplateFile;
        assert_eq!(err.to_string(), "template file option is required");
    }
}
