//! Despatch-advice document, packages, and despatch line items

use crate::fields::{DateTime, Measurement, ProductIdentifier, Quantity, Reference};
use crate::party::Party;
use serde::{Deserialize, Serialize};

/// A despatch advice (DESADV).
///
/// Line items live inside [`Package`]s when the message carried a packaging
/// hierarchy, in the flat `items` list otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DespatchAdviceDocument {
    /// Message reference number from the envelope header.
    pub message_reference: String,

    /// Despatch advice number; empty until supplied.
    pub document_number: String,

    /// Document date; empty until supplied.
    pub document_date: String,

    /// Message function code from the document segment.
    pub function_code: Option<String>,

    /// Delivery date.
    pub delivery_date: Option<String>,

    /// Header dates not mapped to a named field.
    pub dates: Vec<DateTime>,

    /// Header references.
    pub references: Vec<Reference>,

    /// Parties in arrival order.
    pub parties: Vec<Party>,

    /// Header free-text notes.
    pub notes: Vec<String>,

    /// Consignment gross weight.
    pub gross_weight: Option<f64>,

    /// Unit of the consignment gross weight.
    pub gross_weight_unit: Option<String>,

    /// Measurements not mapped to the named weight fields.
    pub measurements: Vec<Measurement>,

    /// Packages in arrival order, when a packaging hierarchy was present.
    pub packages: Vec<Package>,

    /// Flat line-item list, used when no packaging hierarchy was present.
    pub items: Vec<DespatchLineItem>,

    /// Declared line-item count from the summary section.
    pub line_item_count: Option<f64>,

    /// Declared package count from the summary section.
    pub package_count: Option<f64>,
}

/// One package of the consignment packaging hierarchy.
///
/// The walk keeps exactly one package open at a time, so the package list is
/// flat; `id`/`parent` preserve the hierarchy codes for callers that need to
/// rebuild the nesting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Hierarchy identifier of this package level.
    pub id: Option<String>,

    /// Hierarchy identifier of the containing package level.
    pub parent: Option<String>,

    /// Number of packages at this level.
    pub package_count: Option<f64>,

    /// Package type code (e.g. `CT` carton, `PX` pallet).
    pub package_type: Option<String>,

    /// Package gross weight.
    pub gross_weight: Option<f64>,

    /// Unit of the package gross weight.
    pub gross_weight_unit: Option<String>,

    /// Measurements not mapped to the named weight fields.
    pub measurements: Vec<Measurement>,

    /// Line items contained in this package.
    pub items: Vec<DespatchLineItem>,
}

/// One despatched line item with its batch/serial identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DespatchLineItem {
    /// Line number from the line-item segment.
    pub line_number: Option<String>,

    /// Product identifiers, main number first.
    pub product_ids: Vec<ProductIdentifier>,

    /// Item description.
    pub description: Option<String>,

    /// Quantities in arrival order (despatched quantity and friends).
    pub quantities: Vec<Quantity>,

    /// Batch/lot number.
    pub batch_number: Option<String>,

    /// Serial numbers in arrival order.
    pub serial_numbers: Vec<String>,

    /// Dates scoped to this line (best-before, production, …).
    pub dates: Vec<DateTime>,

    /// References scoped to this line.
    pub references: Vec<Reference>,
}
