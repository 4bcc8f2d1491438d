//! Purchase-order and order-response documents

use crate::fields::{
    AllowanceOrCharge, DateTime, MonetaryAmount, Price, ProductIdentifier, Quantity, Reference,
    Tax,
};
use crate::party::Party;
use serde::{Deserialize, Serialize};

/// A purchase order (ORDERS).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDocument {
    /// Message reference number from the envelope header.
    pub message_reference: String,

    /// Order number; empty until the document segment supplies it.
    pub document_number: String,

    /// Order date; empty until a document-date segment supplies it.
    pub document_date: String,

    /// Message function code from the document segment.
    pub function_code: Option<String>,

    /// Reference currency for the order.
    pub currency: Option<String>,

    /// Requested delivery date.
    pub requested_delivery_date: Option<String>,

    /// Header dates not mapped to a named field.
    pub dates: Vec<DateTime>,

    /// Header references.
    pub references: Vec<Reference>,

    /// Parties in arrival order.
    pub parties: Vec<Party>,

    /// Header free-text notes.
    pub notes: Vec<String>,

    /// Header-level allowances and charges.
    pub allowances: Vec<AllowanceOrCharge>,

    /// Header-level tax details.
    pub taxes: Vec<Tax>,

    /// Line items in arrival order.
    pub items: Vec<OrderLineItem>,

    /// Summary-section monetary amounts.
    pub amounts: Vec<MonetaryAmount>,

    /// Declared line-item count from the summary section.
    pub line_item_count: Option<f64>,
}

/// One order line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Line number from the line-item segment.
    pub line_number: Option<String>,

    /// Product identifiers, main number first.
    pub product_ids: Vec<ProductIdentifier>,

    /// Item description.
    pub description: Option<String>,

    /// Quantities in arrival order.
    pub quantities: Vec<Quantity>,

    /// Prices in arrival order.
    pub prices: Vec<Price>,

    /// Monetary amounts scoped to this line.
    pub amounts: Vec<MonetaryAmount>,

    /// References scoped to this line.
    pub references: Vec<Reference>,

    /// Dates scoped to this line.
    pub dates: Vec<DateTime>,

    /// Allowances and charges scoped to this line.
    pub allowances: Vec<AllowanceOrCharge>,

    /// Tax details scoped to this line.
    pub taxes: Vec<Tax>,
}

/// An order response (ORDRSP).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderResponseDocument {
    /// Message reference number from the envelope header.
    pub message_reference: String,

    /// Responded document number; empty until supplied.
    pub document_number: String,

    /// Response date; empty until supplied.
    pub document_date: String,

    /// Message function code from the document segment.
    pub function_code: Option<String>,

    /// Response type code (accepted, amended, rejected, …).
    pub response_type: Option<String>,

    /// Reference currency.
    pub currency: Option<String>,

    /// Requested delivery date.
    pub requested_delivery_date: Option<String>,

    /// Header dates not mapped to a named field.
    pub dates: Vec<DateTime>,

    /// Header references.
    pub references: Vec<Reference>,

    /// Parties in arrival order.
    pub parties: Vec<Party>,

    /// Header free-text notes.
    pub notes: Vec<String>,

    /// Header-level allowances and charges.
    pub allowances: Vec<AllowanceOrCharge>,

    /// Header-level tax details.
    pub taxes: Vec<Tax>,

    /// Line items in arrival order.
    pub items: Vec<OrderResponseLineItem>,

    /// Summary-section monetary amounts.
    pub amounts: Vec<MonetaryAmount>,

    /// Declared line-item count from the summary section.
    pub line_item_count: Option<f64>,
}

/// One order-response line item: the shared order line shape plus the
/// response status for that line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderResponseLineItem {
    /// Shared line-item fields.
    pub line: OrderLineItem,

    /// Line action/status code (accepted, changed, not found, …).
    pub status: Option<String>,

    /// Free-text reason accompanying the status.
    pub reason: Option<String>,
}
