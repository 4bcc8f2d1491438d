//! Despatch-advice (DESADV) assembler
//!
//! Hierarchy levels: party, package, line item. When the message carries no
//! packaging hierarchy (no `CPS` segment), line items flush into the flat
//! document list; once a package is open they flush into it.

use crate::context::{collect_contact, flush_into};
use crate::decode;
use edi_document::{DespatchAdviceDocument, DespatchLineItem, Package, Party};
use edi_message::Message;
use tracing::{debug, trace};

#[derive(Default)]
struct OpenContexts {
    party: Option<Party>,
    package: Option<Package>,
    item: Option<DespatchLineItem>,
}

impl OpenContexts {
    fn flush_item(&mut self, doc: &mut DespatchAdviceDocument) {
        match self.package.as_mut() {
            Some(package) => flush_into(&mut self.item, &mut package.items),
            None => flush_into(&mut self.item, &mut doc.items),
        }
    }

    fn flush_package(&mut self, doc: &mut DespatchAdviceDocument) {
        flush_into(&mut self.package, &mut doc.packages);
    }

    fn flush_party(&mut self, doc: &mut DespatchAdviceDocument) {
        flush_into(&mut self.party, &mut doc.parties);
    }

    /// End-of-stream flush, deepest level first.
    fn flush_all(&mut self, doc: &mut DespatchAdviceDocument) {
        self.flush_item(doc);
        self.flush_package(doc);
        self.flush_party(doc);
    }
}

/// Assemble a despatch advice from a tokenized message.
pub fn assemble(message: &Message) -> DespatchAdviceDocument {
    debug!(
        reference = %message.header.reference,
        segments = message.segments.len(),
        "assembling despatch advice"
    );

    let mut doc = DespatchAdviceDocument {
        message_reference: message.header.reference.clone(),
        ..DespatchAdviceDocument::default()
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
            "CPS" => {
                open.flush_item(&mut doc);
                open.flush_package(&mut doc);
                open.package = Some(Package {
                    id: segment.element(1).map(str::to_string),
                    parent: segment.element(2).map(str::to_string),
                    ..Package::default()
                });
            }
            "PAC" => {
                if let Some(package) = open.package.as_mut() {
                    package.package_count = decode::numeric_opt(segment.element(1));
                    package.package_type = segment.component(3, 1).map(str::to_string);
                }
            }
            "LIN" => {
                open.flush_item(&mut doc);
                let mut item = DespatchLineItem {
                    line_number: segment.element(1).map(str::to_string),
                    ..DespatchLineItem::default()
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
            "GIR" => {
                if let Some(item) = open.item.as_mut() {
                    for (number, qualifier) in decode::related_identifications(segment) {
                        match qualifier.as_deref() {
                            Some("BT" | "BX") => item.batch_number = Some(number),
                            Some("BN" | "SE") => item.serial_numbers.push(number),
                            _ => trace!(?qualifier, "related identification left unmapped"),
                        }
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
                            "132" => doc.delivery_date = Some(date.value),
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
            "MEA" => {
                if let Some(measurement) = decode::measurement(segment) {
                    let (weight, unit, generic) = match open.package.as_mut() {
                        Some(package) => (
                            &mut package.gross_weight,
                            &mut package.gross_weight_unit,
                            &mut package.measurements,
                        ),
                        None => (
                            &mut doc.gross_weight,
                            &mut doc.gross_weight_unit,
                            &mut doc.measurements,
                        ),
                    };
                    if matches!(measurement.dimension.as_str(), "AAB" | "WT") {
                        *weight = Some(measurement.value);
                        *unit = measurement.unit;
                    } else {
                        generic.push(measurement);
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
                Some("7" | "52") => {
                    doc.package_count = Some(decode::numeric(segment.component(1, 2)));
                }
                qualifier => trace!(?qualifier, "control count left unmapped"),
            },
            "UNS" => open.flush_all(&mut doc),
            _ => trace!(tag = %segment.id, "segment outside the despatch mapping skipped"),
        }
        index += 1;
    }

    open.flush_all(&mut doc);
    doc
}
