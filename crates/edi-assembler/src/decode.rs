//! Per-field decoders
//!
//! Small pure functions turning one or more addressed segment values into a
//! typed substructure. Decoders anchored on a qualifier return `None` when
//! the qualifier is missing; everything else follows the permissive policy:
//! absent optional text stays `None`, numeric text that fails to parse
//! becomes `0.0`.

use chrono::NaiveDate;
use edi_document::{
    AllowanceChargeIndicator, AllowanceOrCharge, Communication, Contact, DateTime, Measurement,
    MonetaryAmount, Party, PartyIdentification, Price, ProductIdentifier, Quantity, Reference,
    Tax,
};
use edi_message::Segment;

/// Permissive numeric conversion for required fields.
pub(crate) fn numeric(value: Option<&str>) -> f64 {
    value
        .and_then(|text| text.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Permissive numeric conversion for optional fields: absent stays absent,
/// present-but-unparseable becomes `0.0`.
pub(crate) fn numeric_opt(value: Option<&str>) -> Option<f64> {
    value.map(|text| text.trim().parse::<f64>().unwrap_or(0.0))
}

fn text(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Join the present components of a composite element with spaces.
///
/// Party names and street addresses arrive split over up to five
/// components.
fn join_components(segment: &Segment, element: usize) -> Option<String> {
    let parts: Vec<&str> = (1..=5)
        .filter_map(|component| segment.component(element, component))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Rewrite a date value according to its format qualifier.
///
/// Qualifier `102` (8-digit `CCYYMMDD`) becomes `YYYY-MM-DD`. Every other
/// qualifier passes through unchanged; 12/14-digit timestamp formats are a
/// known limitation and are not normalized.
pub fn format_date(value: &str, format: Option<&str>) -> String {
    if format == Some("102") {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y%m%d") {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    value.to_string()
}

/// Decode a DTM segment.
pub fn date_time(segment: &Segment) -> Option<DateTime> {
    let qualifier = segment.component(1, 1)?.to_string();
    let format = text(segment.component(1, 3));
    let value = segment
        .component(1, 2)
        .map(|raw| format_date(raw, format.as_deref()))
        .unwrap_or_default();
    Some(DateTime {
        qualifier,
        value,
        format,
    })
}

/// Decode an RFF segment.
pub fn reference(segment: &Segment) -> Option<Reference> {
    let qualifier = segment.component(1, 1)?.to_string();
    Some(Reference {
        qualifier,
        number: text(segment.component(1, 2)),
        line_number: text(segment.component(1, 3)),
        document_number: text(segment.component(1, 4)),
    })
}

/// Decode a NAD segment.
pub fn party(segment: &Segment) -> Party {
    let mut party = Party::new(segment.element(1).unwrap_or_default());
    if let Some(id) = segment.component(2, 1) {
        party.identification = Some(PartyIdentification {
            id: id.to_string(),
            code_list: text(segment.component(2, 2)),
            agency: text(segment.component(2, 3)),
        });
    }
    party.name = join_components(segment, 4);
    party.street = join_components(segment, 5);
    party.city = text(segment.element(6));
    party.postal_code = text(segment.element(8));
    party.country = text(segment.element(9));
    party
}

/// Decode a CTA segment. Communications are attached by the lookahead in
/// [`crate::context::collect_contact`].
pub fn contact(segment: &Segment) -> Contact {
    Contact {
        function: text(segment.element(1)),
        name: text(
            segment
                .component(2, 2)
                .or_else(|| segment.component(2, 1)),
        ),
        communications: Vec::new(),
    }
}

/// Decode a COM segment.
pub fn communication(segment: &Segment) -> Option<Communication> {
    let number = segment.component(1, 1)?.to_string();
    Some(Communication {
        number,
        channel: text(segment.component(1, 2)),
    })
}

/// Decode a QTY segment.
pub fn quantity(segment: &Segment) -> Option<Quantity> {
    let qualifier = segment.component(1, 1)?.to_string();
    Some(Quantity {
        qualifier,
        value: numeric(segment.component(1, 2)),
        unit: text(segment.component(1, 3)),
    })
}

/// Decode an MOA segment.
pub fn monetary_amount(segment: &Segment) -> Option<MonetaryAmount> {
    let qualifier = segment.component(1, 1)?.to_string();
    Some(MonetaryAmount {
        qualifier,
        amount: numeric(segment.component(1, 2)),
        currency: text(segment.component(1, 3)),
    })
}

/// Decode a PRI segment.
pub fn price(segment: &Segment) -> Option<Price> {
    let qualifier = segment.component(1, 1)?.to_string();
    Some(Price {
        qualifier,
        amount: numeric(segment.component(1, 2)),
        price_type: text(segment.component(1, 4)),
        basis: numeric_opt(segment.component(1, 5)),
        unit: text(segment.component(1, 6)),
    })
}

/// Decode a TAX segment.
pub fn tax(segment: &Segment) -> Option<Tax> {
    let function = segment.element(1)?.to_string();
    Some(Tax {
        function,
        tax_type: text(segment.component(2, 1)),
        rate: numeric(segment.component(5, 4)),
        category: text(segment.component(6, 1)),
    })
}

/// Decode the indicator and service code of an ALC segment. Percentage,
/// amount, and basis arrive in trailing segments consumed by
/// [`crate::context::collect_allowance`].
pub fn allowance_or_charge(segment: &Segment) -> Option<AllowanceOrCharge> {
    let indicator = match segment.element(1)? {
        "A" => AllowanceChargeIndicator::Allowance,
        "C" => AllowanceChargeIndicator::Charge,
        _ => return None,
    };
    Some(AllowanceOrCharge {
        indicator,
        service_code: text(segment.component(5, 1)),
        percentage: None,
        amount: None,
        basis: None,
    })
}

/// Decode an MEA segment.
pub fn measurement(segment: &Segment) -> Option<Measurement> {
    let dimension = segment.component(2, 1)?.to_string();
    Some(Measurement {
        dimension,
        value: numeric(segment.component(3, 2)),
        unit: text(segment.component(3, 1)),
    })
}

/// Decode the description text of an IMD segment.
pub fn item_description(segment: &Segment) -> Option<String> {
    text(
        segment
            .component(3, 4)
            .or_else(|| segment.component(3, 1)),
    )
}

/// Decode the text of an FTX segment.
pub fn free_text(segment: &Segment) -> Option<String> {
    let parts: Vec<&str> = (1..=5)
        .filter_map(|component| segment.component(4, component))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Decode the main product identifier of a LIN segment.
pub fn line_product_identifier(segment: &Segment) -> Option<ProductIdentifier> {
    let number = segment.component(3, 1)?.to_string();
    Some(ProductIdentifier {
        number,
        id_type: text(segment.component(3, 2)),
        agency: text(segment.component(3, 4)),
    })
}

/// Decode the additional product identifiers of a PIA segment.
pub fn additional_product_identifiers(segment: &Segment) -> Vec<ProductIdentifier> {
    let mut identifiers = Vec::new();
    for position in 2..=segment.elements.len() {
        if let Some(number) = segment.component(position, 1) {
            identifiers.push(ProductIdentifier {
                number: number.to_string(),
                id_type: text(segment.component(position, 2)),
                agency: text(segment.component(position, 4)),
            });
        }
    }
    identifiers
}

/// Decode the `{number, qualifier}` pairs of a GIR segment.
pub fn related_identifications(segment: &Segment) -> Vec<(String, Option<String>)> {
    let mut identifications = Vec::new();
    for position in 2..=segment.elements.len() {
        if let Some(number) = segment.component(position, 1) {
            identifications.push((number.to_string(), text(segment.component(position, 2))));
        }
    }
    identifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use edi_message::Element;

    fn seg(id: &str, elements: Vec<Element>) -> Segment {
        Segment::with_elements(id, elements)
    }

    #[test]
    fn calendar_date_with_format_102_is_rewritten() {
        assert_eq!(format_date("20240115", Some("102")), "2024-01-15");
    }

    #[test]
    fn other_date_formats_pass_through_unchanged() {
        assert_eq!(format_date("20240115", Some("203")), "20240115");
        assert_eq!(format_date("202401151030", Some("203")), "202401151030");
        assert_eq!(format_date("20240115", None), "20240115");
    }

    #[test]
    fn unparseable_102_value_passes_through() {
        assert_eq!(format_date("2024-W03", Some("102")), "2024-W03");
    }

    #[test]
    fn numeric_defaults_to_zero_on_garbage() {
        assert_eq!(numeric(Some("12.5")), 12.5);
        assert_eq!(numeric(Some("not-a-number")), 0.0);
        assert_eq!(numeric(None), 0.0);
        assert_eq!(numeric_opt(Some("junk")), Some(0.0));
        assert_eq!(numeric_opt(None), None);
    }

    #[test]
    fn date_time_requires_a_qualifier() {
        let segment = seg("DTM", vec![Element::composite(["", "20240115", "102"])]);
        assert!(date_time(&segment).is_none());
    }

    #[test]
    fn date_time_applies_the_102_rewrite() {
        let segment = seg("DTM", vec![Element::composite(["137", "20240115", "102"])]);
        let date = date_time(&segment).expect("qualifier present");
        assert_eq!(date.qualifier, "137");
        assert_eq!(date.value, "2024-01-15");
        assert_eq!(date.format.as_deref(), Some("102"));
    }

    #[test]
    fn reference_decodes_sub_numbers() {
        let segment = seg("RFF", vec![Element::composite(["ON", "PO-77", "3", "DOC-1"])]);
        let reference = reference(&segment).expect("qualifier present");
        assert_eq!(reference.qualifier, "ON");
        assert_eq!(reference.number.as_deref(), Some("PO-77"));
        assert_eq!(reference.line_number.as_deref(), Some("3"));
        assert_eq!(reference.document_number.as_deref(), Some("DOC-1"));
    }

    #[test]
    fn reference_from_simple_element_uses_fallback() {
        // RFF with a non-composite qualifier element still decodes via the
        // single-component fallback.
        let segment = seg("RFF", vec![Element::simple("ON")]);
        let reference = reference(&segment).expect("qualifier present");
        assert_eq!(reference.qualifier, "ON");
        assert_eq!(reference.number, None);
    }

    #[test]
    fn party_decodes_identification_and_address() {
        let segment = seg(
            "NAD",
            vec![
                Element::simple("BY"),
                Element::composite(["1234567890123", "", "9"]),
                Element::simple(""),
                Element::composite(["ACME", "Retail"]),
                Element::simple("Main Street 1"),
                Element::simple("Springfield"),
                Element::simple(""),
                Element::simple("12345"),
                Element::simple("DE"),
            ],
        );

        let party = party(&segment);
        assert_eq!(party.qualifier, "BY");
        let identification = party.identification.expect("identification present");
        assert_eq!(identification.id, "1234567890123");
        assert_eq!(identification.code_list, None);
        assert_eq!(identification.agency.as_deref(), Some("9"));
        assert_eq!(party.name.as_deref(), Some("ACME Retail"));
        assert_eq!(party.street.as_deref(), Some("Main Street 1"));
        assert_eq!(party.city.as_deref(), Some("Springfield"));
        assert_eq!(party.postal_code.as_deref(), Some("12345"));
        assert_eq!(party.country.as_deref(), Some("DE"));
    }

    #[test]
    fn quantity_with_garbage_value_defaults_to_zero() {
        let segment = seg("QTY", vec![Element::composite(["21", "ten", "PCE"])]);
        let quantity = quantity(&segment).expect("qualifier present");
        assert_eq!(quantity.value, 0.0);
        assert_eq!(quantity.unit.as_deref(), Some("PCE"));
    }

    #[test]
    fn measurement_decodes_dimension_unit_and_value() {
        let segment = seg(
            "MEA",
            vec![
                Element::simple("AAE"),
                Element::simple("WT"),
                Element::composite(["KGM", "12.5"]),
            ],
        );
        let measurement = measurement(&segment).expect("dimension present");
        assert_eq!(measurement.dimension, "WT");
        assert_eq!(measurement.value, 12.5);
        assert_eq!(measurement.unit.as_deref(), Some("KGM"));
    }

    #[test]
    fn allowance_indicator_outside_a_c_is_rejected() {
        let segment = seg("ALC", vec![Element::simple("X")]);
        assert!(allowance_or_charge(&segment).is_none());
    }

    #[test]
    fn additional_product_identifiers_walk_all_elements() {
        let segment = seg(
            "PIA",
            vec![
                Element::simple("1"),
                Element::composite(["ART-9", "SA"]),
                Element::composite(["4000862141404", "EN"]),
            ],
        );
        let identifiers = additional_product_identifiers(&segment);
        assert_eq!(identifiers.len(), 2);
        assert_eq!(identifiers[0].number, "ART-9");
        assert_eq!(identifiers[0].id_type.as_deref(), Some("SA"));
        assert_eq!(identifiers[1].number, "4000862141404");
        assert_eq!(identifiers[1].id_type.as_deref(), Some("EN"));
    }

    #[test]
    fn related_identifications_keep_pair_order() {
        let segment = seg(
            "GIR",
            vec![
                Element::simple("3"),
                Element::composite(["SER-1", "BN"]),
                Element::composite(["SER-2", "BN"]),
            ],
        );
        let pairs = related_identifications(&segment);
        assert_eq!(
            pairs,
            vec![
                ("SER-1".to_string(), Some("BN".to_string())),
                ("SER-2".to_string(), Some("BN".to_string())),
            ]
        );
    }
}
