//! Invoice document, line items, and totals

use crate::fields::{
    AllowanceOrCharge, DateTime, MonetaryAmount, Price, ProductIdentifier, Quantity, Reference,
    Tax,
};
use crate::party::Party;
use serde::{Deserialize, Serialize};

/// An invoice (INVOIC).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Message reference number from the envelope header.
    pub message_reference: String,

    /// Invoice number; empty until supplied.
    pub document_number: String,

    /// Invoice date; empty until supplied.
    pub document_date: String,

    /// Message function code from the document segment.
    pub function_code: Option<String>,

    /// Invoicing currency.
    pub currency: Option<String>,

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
    pub items: Vec<InvoiceLineItem>,

    /// Summary-section amounts not mapped to a named total.
    pub amounts: Vec<MonetaryAmount>,

    /// Totals block, populated strictly from source segments.
    pub totals: InvoiceTotals,

    /// Declared line-item count from the summary section.
    pub line_item_count: Option<f64>,
}

/// One invoiced line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Line number from the line-item segment.
    pub line_number: Option<String>,

    /// Product identifiers, main number first.
    pub product_ids: Vec<ProductIdentifier>,

    /// Item description.
    pub description: Option<String>,

    /// Quantities in arrival order (invoiced quantity and friends).
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

/// Invoice totals, taken verbatim from the summary section.
///
/// Nothing here is derived from line items. `invoice_total` is the one
/// field without a safe default: when the source never supplied it the
/// document is malformed, and rejecting it is the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Total invoice amount. `None` marks a malformed document.
    pub invoice_total: Option<f64>,

    /// Total of all line amounts.
    pub line_total: Option<f64>,

    /// Total tax amount.
    pub tax_total: Option<f64>,

    /// Taxable basis amount.
    pub taxable_amount: Option<f64>,

    /// Total of allowances and charges.
    pub allowance_charge_total: Option<f64>,

    /// Amount due / payable.
    pub amount_due: Option<f64>,
}
