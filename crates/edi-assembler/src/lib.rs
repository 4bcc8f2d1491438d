//! # edi-assembler
//!
//! Single-pass structural assembly of typed documents from tokenized
//! EDIFACT messages.
//!
//! This crate reconstructs the implicit hierarchy of a flat segment
//! sequence (parties, packages, line items, sub-identifiers) using only
//! segment-type transition rules, and maps the result onto the typed
//! documents of `edi-document`. One [`Message`](edi_message::Message) in,
//! one [`TypedDocument`](edi_document::TypedDocument) out; no I/O, no
//! retained state across calls.

/// Open-context state helpers and lookahead grouping.
pub mod context;
/// Per-field decoders from addressed segment values.
pub mod decode;
/// Despatch-advice (DESADV) assembler.
pub mod desadv;
/// Message-type dispatcher.
pub mod dispatch;
/// Invoice (INVOIC) assembler.
pub mod invoic;
/// Purchase-order (ORDERS) assembler.
pub mod orders;
/// Order-response (ORDRSP) assembler.
pub mod ordrsp;

pub use dispatch::assemble_document;

use thiserror::Error;

/// Errors that can occur when assembling a document.
///
/// Field-level problems never surface here: missing optional source data
/// yields absent fields and malformed numeric text yields `0.0`. The one
/// hard failure is a message type outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported message type: {message_type}")]
    UnsupportedMessageType { message_type: String },
}

pub type Result<T> = std::result::Result<T, Error>;
