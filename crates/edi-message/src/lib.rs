#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # edi-message
//!
//! Tokenized EDIFACT message model and positional segment addressing.
//!
//! This crate defines the input contract for the assembly subsystem: a
//! [`Message`] is a header plus the ordered segment sequence produced by the
//! upstream tokenizer. Splitting raw interchange text into segments,
//! elements, and components (delimiters, release characters, UNA/UNB
//! envelopes) happens upstream; here segments are already decoded.

/// Message container and header fields.
pub mod message;
/// Segment/element model and 1-based positional addressing.
pub mod segment;

pub use message::{Message, MessageHeader};
pub use segment::{Element, Segment};
