//! Order-response (ORDRSP) assembler
//!
//! Shares the purchase-order line shape and adds the response fields: the
//! document-level response type from the document segment, a per-line
//! action/status code from the line-item segment, and a per-line free-text
//! reason.

use crate::context::{collect_allowance, collect_contact, flush_into};
use crate::decode;
use edi_document::{OrderResponseDocument, OrderResponseLineItem, Party};
use edi_message::Message;
use tracing::{debug, trace};

#[derive(Default)]
struct OpenContexts {
    party: Option<Party>,
    item: Option<OrderResponseLineItem>,
}

impl OpenContexts {
    fn flush_item(&mut self, doc: &mut OrderResponseDocument) {
        flush_into(&mut self.item, &mut doc.items);
    }

    fn flush_party(&mut self, doc: &mut OrderResponseDocument) {
        flush_into(&mut self.party, &mut doc.parties);
    }

    fn flush_all(&mut self, doc: &mut OrderResponseDocument) {
        self.flush_item(doc);
        self.flush_party(doc);
    }
}

/// Assemble an order response from a tokenized message.
pub fn assemble(message: &Message) -> OrderResponseDocument {
    debug!(
        reference = %message.header.reference,
        segments = message.segments.len(),
        "assembling order response"
    );

    let mut doc = OrderResponseDocument {
        message_reference: message.header.reference.clone(),
        ..OrderResponseDocument::default()
    };
    let mut open = OpenContexts::default();
    let segments = &message.segments;
    let mut index = 0;

    while index < segments.len() {
        let segment = &segments[index];
        match segment.id.as_str() {
            "BGM" => {
                doc.document_number = segment.component(2, 1).unwrap_or_default().to_string();
                doc.function_code = segment.element(3).map(str::to_string);
                doc.response_type = segment.element(4).map(str::to_string);
            }
            "CUX" => {
                doc.currency = segment.component(1, 2).map(str::to_string);
            }
            "NAD" => {
                open.flush_party(&mut doc);
                open.party = Some(decode::party(segment));
            }
            "CTA" => {
                let (contact, next) = collect_contact(segments, index);
                match open.party.as_mut() {
                    Some(party) => party.contacts.push(contact),
                    None => trace!("contact before any party dropped"),
                }
                index = next;
                continue;
            }
            "LIN" => {
                open.flush_item(&mut doc);
                let mut item = OrderResponseLineItem {
                    status: segment.element(2).map(str::to_string),
                    ..OrderResponseLineItem::default()
                };
                item.line.line_number = segment.element(1).map(str::to_string);
                item.line
                    .product_ids
                    .extend(decode::line_product_identifier(segment));
                open.item = Some(item);
            }
            "PIA" => {
                if let Some(item) = open.item.as_mut() {
                    item.line
                        .product_ids
                        .extend(decode::additional_product_identifiers(segment));
                }
            }
            "IMD" => {
                if let Some(item) = open.item.as_mut() {
                    item.line.description = decode::item_description(segment);
                }
            }
            "QTY" => {
                if let Some(quantity) = decode::quantity(segment) {
                    match open.item.as_mut() {
                        Some(item) => item.line.quantities.push(quantity),
                        None => trace!(qualifier = %quantity.qualifier, "quantity outside any line dropped"),
                    }
                }
            }
            "PRI" => {
                if let Some(price) = decode::price(segment) {
                    if let Some(item) = open.item.as_mut() {
                        item.line.prices.push(price);
                    }
                }
            }
            "MOA" => {
                if let Some(amount) = decode::monetary_amount(segment) {
                    match open.item.as_mut() {
                        Some(item) => item.line.amounts.push(amount),
                        None => doc.amounts.push(amount),
                    }
                }
            }
            "DTM" => {
                if let Some(date) = decode::date_time(segment) {
                    if let Some(item) = open.item.as_mut() {
                        item.line.dates.push(date);
                    } else {
                        match date.qualifier.as_str() {
                            "137" => doc.document_date = date.value,
                            "2" => doc.requested_delivery_date = Some(date.value),
                            _ => doc.dates.push(date),
                        }
                    }
                }
            }
            "RFF" => {
                if let Some(reference) = decode::reference(segment) {
                    if let Some(item) = open.item.as_mut() {
                        item.line.references.push(reference);
                    } else if let Some(party) = open.party.as_mut() {
                        party.references.push(reference);
                    } else {
                        doc.references.push(reference);
                    }
                }
            }
            "ALC" => {
                let (entry, next) = collect_allowance(segments, index);
                if let Some(entry) = entry {
                    match open.item.as_mut() {
                        Some(item) => item.line.allowances.push(entry),
                        None => doc.allowances.push(entry),
                    }
                }
                index = next;
                continue;
            }
            "TAX" => {
                if let Some(tax) = decode::tax(segment) {
                    match open.item.as_mut() {
                        Some(item) => item.line.taxes.push(tax),
                        None => doc.taxes.push(tax),
                    }
                }
            }
            "FTX" => {
                if let Some(note) = decode::free_text(segment) {
                    match open.item.as_mut() {
                        // The first line-level text is the response reason.
                        Some(item) if item.reason.is_none() => item.reason = Some(note),
                        _ => doc.notes.push(note),
                    }
                }
            }
            "CNT" => match segment.component(1, 1) {
                Some("2") => doc.line_item_count = Some(decode::numeric(segment.component(1, 2))),
                qualifier => trace!(?qualifier, "control count left unmapped"),
            },
            "UNS" => open.flush_all(&mut doc),
            _ => trace!(tag = %segment.id, "segment outside the order-response mapping skipped"),
        }
        index += 1;
    }

    open.flush_all(&mut doc);
    doc
}
