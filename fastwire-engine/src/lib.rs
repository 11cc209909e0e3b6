/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! # Fastwire Engine
//!
//! The delivery boundary between the external FAST decoder and message
//! consumers.
//!
//! - [`MessageConsumer`]: the callback set the decoder invokes, with one
//!   required message channel and three diagnostic side channels
//! - [`MessageSource`]: the black-box decoder contract
//! - [`SynchronousDriver`]: the blocking decode loop
//! - [`DriverConfig`]: run configuration with startup validation
//!
//! ## Control flow
//!
//! The driver pulls events from the source one at a time and waits for the
//! consumer's boolean verdict before pulling the next. There is no overlap
//! between decode of message N+1 and processing of message N, and no
//! cancellation beyond the boolean returns.

pub mod config;
pub mod consumer;
pub mod driver;
pub mod source;

pub use config::DriverConfig;
pub use consumer::MessageConsumer;
pub use driver::SynchronousDriver;
pub use source::{MessageSource, SourceEvent, VecMessageSource};
