//! Tagged union over the four document types
//!
//! Assemblers never need polymorphic dispatch beyond the initial type
//! selection, so the documents are a sum type rather than a trait hierarchy;
//! consumers match on the discriminant.

use crate::despatch::DespatchAdviceDocument;
use crate::invoice::InvoiceDocument;
use crate::orders::{OrderDocument, OrderResponseDocument};
use serde::{Deserialize, Serialize};

/// One assembled business document, tagged by message type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedDocument {
    /// Purchase order (ORDERS).
    Orders(OrderDocument),

    /// Order response (ORDRSP).
    OrderResponse(OrderResponseDocument),

    /// Despatch advice (DESADV).
    DespatchAdvice(DespatchAdviceDocument),

    /// Invoice (INVOIC).
    Invoice(InvoiceDocument),
}

impl TypedDocument {
    /// EDIFACT message type this document was assembled from.
    pub fn message_type(&self) -> &'static str {
        match self {
            Self::Orders(_) => "ORDERS",
            Self::OrderResponse(_) => "ORDRSP",
            Self::DespatchAdvice(_) => "DESADV",
            Self::Invoice(_) => "INVOIC",
        }
    }

    /// Message reference number carried over from the envelope header.
    pub fn message_reference(&self) -> &str {
        match self {
            Self::Orders(doc) => &doc.message_reference,
            Self::OrderResponse(doc) => &doc.message_reference,
            Self::DespatchAdvice(doc) => &doc.message_reference,
            Self::Invoice(doc) => &doc.message_reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_maps_to_message_type() {
        let doc = TypedDocument::DespatchAdvice(DespatchAdviceDocument {
            message_reference: "ME1".to_string(),
            ..DespatchAdviceDocument::default()
        });

        assert_eq!(doc.message_type(), "DESADV");
        assert_eq!(doc.message_reference(), "ME1");
    }

    #[test]
    fn typed_document_round_trips_through_json() {
        let doc = TypedDocument::Orders(OrderDocument {
            message_reference: "ME2".to_string(),
            document_number: "PO123".to_string(),
            ..OrderDocument::default()
        });

        let json = serde_json::to_string(&doc).expect("document should serialize");
        let back: TypedDocument =
            serde_json::from_str(&json).expect("document should deserialize");
        assert_eq!(back, doc);
    }
}
