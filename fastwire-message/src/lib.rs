/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! # Fastwire Message
//!
//! The in-memory representation of a decoded FAST message: a self-describing
//! tree of typed fields.
//!
//! - [`Field`]: closed sum type over the ten payload kinds
//! - [`FieldSet`]: insertion-ordered identity→field mapping
//! - [`Sequence`]: repeating group, an ordered list of [`FieldSet`] entries
//! - [`Message`]: a top-level [`FieldSet`], the decoder's unit of delivery
//! - [`MessageBuilder`]: fluent construction for tests and demos
//!
//! ## Ownership
//!
//! A decoded tree is constructed once by the external decoder and is
//! read-only thereafter. The decoder hands it to the registered consumer for
//! the duration of one callback; a consumer that needs data past the call
//! must extract values during the call.

pub mod builder;
pub mod field;
pub mod field_set;
pub mod sequence;

pub use builder::MessageBuilder;
pub use field::Field;
pub use field_set::{FieldSet, MessageField};
pub use sequence::Sequence;

/// A decoded message: a top-level [`FieldSet`] with no governing identity.
pub type Message = FieldSet;
