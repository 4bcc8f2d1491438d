//! Purchase-order (ORDERS) assembler
//!
//! Hierarchy levels: party, line item. Header segments arriving before the
//! first `NAD`/`LIN` accumulate at message level; summary-section amounts
//! and counts land on the document after `UNS` closes the detail section.

use crate::context::{collect_allowance, collect_contact, flush_into};
use crate::decode;
use edi_document::{OrderDocument, OrderLineItem, Party};
use edi_message::Message;
use tracing::{debug, trace};

#[derive(Default)]
struct OpenContexts {
    party: Option<Party>,
    item: Option<OrderLineItem>,
}

impl OpenContexts {
    fn flush_item(&mut self, doc: &mut OrderDocument) {
        flush_into(&mut self.item, &mut doc.items);
    }

    fn flush_party(&mut self, doc: &mut OrderDocument) {
        flush_into(&mut self.party, &mut doc.parties);
    }

    fn flush_all(&mut self, doc: &mut OrderDocument) {
        self.flush_item(doc);
        self.flush_party(doc);
    }
}

/// Assemble a purchase order from a tokenized message.
pub fn assemble(message: &Message) -> OrderDocument {
    debug!(
        reference = %message.header.reference,
        segments = message.segments.len(),
        "assembling purchase order"
    );

    let mut doc = OrderDocument {
        message_reference: message.header.reference.clone(),
        ..OrderDocument::default()
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
                let mut item = OrderLineItem {
                    line_number: segment.element(1).map(str::to_string),
                    ..OrderLineItem::default()
                };
                item.product_ids.extend(decode::line_product_identifier(segment));
                open.item = Some(item);
            }
            "PIA" => {
                if let Some(item) = open.item.as_mut() {
                    item.product_ids
                        .extend(decode::additional_product_identifiers(segment));
                }
            }
            "IMD" => {
                if let Some(item) = open.item.as_mut() {
                    item.description = decode::item_description(segment);
                }
            }
            "QTY" => {
                if let Some(quantity) = decode::quantity(segment) {
                    match open.item.as_mut() {
                        Some(item) => item.quantities.push(quantity),
                        None => trace!(qualifier = %quantity.qualifier, "quantity outside any line dropped"),
                    }
                }
            }
            "PRI" => {
                if let Some(price) = decode::price(segment) {
                    if let Some(item) = open.item.as_mut() {
                        item.prices.push(price);
                    }
                }
            }
            "MOA" => {
                if let Some(amount) = decode::monetary_amount(segment) {
                    match open.item.as_mut() {
                        Some(item) => item.amounts.push(amount),
                        None => doc.amounts.push(amount),
                    }
                }
            }
            "DTM" => {
                if let Some(date) = decode::date_time(segment) {
                    if let Some(item) = open.item.as_mut() {
                        item.dates.push(date);
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
                        item.references.push(reference);
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
                        Some(item) => item.allowances.push(entry),
                        None => doc.allowances.push(entry),
                    }
                }
                index = next;
                continue;
            }
            "TAX" => {
                if let Some(tax) = decode::tax(segment) {
                    match open.item.as_mut() {
                        Some(item) => item.taxes.push(tax),
                        None => doc.taxes.push(tax),
                    }
                }
            }
            "FTX" => {
                if let Some(note) = decode::free_text(segment) {
                    doc.notes.push(note);
                }
            }
            "CNT" => match segment.component(1, 1) {
                Some("2") => doc.line_item_count = Some(decode::numeric(segment.component(1, 2))),
                qualifier => trace!(?qualifier, "control count left unmapped"),
            },
            "UNS" => open.flush_all(&mut doc),
            _ => trace!(tag = %segment.id, "segment outside the order mapping skipped"),
        }
        index += 1;
    }

    open.flush_all(&mut doc);
    doc
}
