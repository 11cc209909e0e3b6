/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! # Fastwire Core
//!
//! Core types and error definitions for the fastwire FAST message engine.
//!
//! This crate provides the fundamental building blocks used across all
//! fastwire crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Decimal**: Exact fixed-point values as mantissa × 10^exponent
//! - **FieldIdentity**: Namespace-qualified field identification
//! - **ValueKind / LogLevel**: The closed field-type tag set and the
//!   decoder log severity scale
//!
//! ## Exact Values
//!
//! Decoded FAST values are never represented as binary floats internally.
//! [`Decimal`] keeps the mantissa and exponent exactly as decoded, and its
//! equality is structural, not numeric.

pub mod decimal;
pub mod error;
pub mod identity;
pub mod types;

pub use decimal::Decimal;
pub use error::{ConfigError, FastWireError, ModelError, Result, WalkError};
pub use identity::FieldIdentity;
pub use types::{LogLevel, ValueKind};
