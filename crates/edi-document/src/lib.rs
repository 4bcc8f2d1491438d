#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # edi-document
//!
//! Typed business documents assembled from tokenized EDIFACT messages.
//!
//! This crate defines the output contract of the assembly subsystem: one
//! strongly-typed document per supported message type (purchase order,
//! order response, despatch advice, invoice), unified in the
//! [`TypedDocument`] tagged union, plus the substructures shared across all
//! four (parties, references, dates, amounts, …).
//!
//! Field-level defaults follow the permissive assembly policy: numeric
//! fields are `0.0` when their source text failed to parse, descriptive
//! fields are `None` when missing, and the top-level identifying fields
//! (`document_number`, `document_date`) are empty strings until overwritten.

/// Despatch-advice document, packages, and despatch line items.
pub mod despatch;
/// The tagged union over the four document types.
pub mod document;
/// Substructures shared across all message types.
pub mod fields;
/// Invoice document, line items, and totals.
pub mod invoice;
/// Purchase-order and order-response documents and line items.
pub mod orders;
/// Party model with nested contacts and references.
pub mod party;

pub use despatch::{DespatchAdviceDocument, DespatchLineItem, Package};
pub use document::TypedDocument;
pub use fields::{
    AllowanceChargeIndicator, AllowanceOrCharge, DateTime, Measurement, MonetaryAmount, Price,
    ProductIdentifier, Quantity, Reference, Tax,
};
pub use invoice::{InvoiceDocument, InvoiceLineItem, InvoiceTotals};
pub use orders::{OrderDocument, OrderLineItem, OrderResponseDocument, OrderResponseLineItem};
pub use party::{Communication, Contact, Party, PartyIdentification};
