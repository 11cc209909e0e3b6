/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! # Fastwire Interpret
//!
//! The generic traversal and dispatch algorithm over decoded message trees,
//! and the consumers built on it.
//!
//! - [`MessageVisitor`]: per-kind leaf callbacks plus structure callbacks
//! - [`walk`]: the shared depth-first, pre-order dispatch skeleton
//! - [`MessageInterpreter`]: human-readable formatting consumer
//! - [`MessageCounter`]: per-kind statistics consumer
//! - [`NullConsumer`]: silent display mode
//!
//! Consumers differ only in what their leaf and enter-structure actions do;
//! the dispatch skeleton is shared by all of them.

pub mod counter;
pub mod interpreter;
pub mod visitor;
pub mod walk;

pub use counter::{MessageCounter, TypeCounts};
pub use interpreter::{MessageInterpreter, NullConsumer};
pub use visitor::MessageVisitor;
pub use walk::{walk, MAX_WALK_DEPTH};
