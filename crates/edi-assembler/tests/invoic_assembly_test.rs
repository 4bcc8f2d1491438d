use edi_assembler::invoic;
use edi_message::{Element, Message, MessageHeader, Segment};

fn seg(id: &str, elements: Vec<Element>) -> Segment {
    Segment::with_elements(id, elements)
}

fn message(segments: Vec<Segment>) -> Message {
    Message::with_segments(
        MessageHeader {
            reference: "ME000300".to_string(),
            message_type: "INVOIC".to_string(),
            function: Some("9".to_string()),
        },
        segments,
    )
}

fn invoice_with_totals() -> Message {
    message(vec![
        seg(
            "BGM",
            vec![
                Element::simple("380"),
                Element::simple("INV-9001"),
                Element::simple("9"),
            ],
        ),
        seg("DTM", vec![Element::composite(["137", "20240131", "102"])]),
        seg("CUX", vec![Element::composite(["2", "EUR", "4"])]),
        seg(
            "NAD",
            vec![
                Element::simple("SU"),
                Element::composite(["4098765000002", "", "9"]),
            ],
        ),
        seg(
            "TAX",
            vec![
                Element::simple("7"),
                Element::composite(["VAT"]),
                Element::simple(""),
                Element::simple(""),
                Element::composite(["", "", "", "19"]),
                Element::simple("S"),
            ],
        ),
        seg(
            "LIN",
            vec![
                Element::simple("1"),
                Element::simple(""),
                Element::composite(["4000862141404", "EN"]),
            ],
        ),
        seg("QTY", vec![Element::composite(["47", "120", "PCE"])]),
        seg(
            "PRI",
            vec![Element::composite(["AAA", "1.19", "", "", "1", "PCE"])],
        ),
        seg("MOA", vec![Element::composite(["203", "142.80"])]),
        seg(
            "TAX",
            vec![
                Element::simple("7"),
                Element::composite(["VAT"]),
                Element::simple(""),
                Element::simple(""),
                Element::composite(["", "", "", "19"]),
                Element::simple("S"),
            ],
        ),
        seg("UNS", vec![Element::simple("S")]),
        seg("MOA", vec![Element::composite(["79", "142.80"])]),
        seg("MOA", vec![Element::composite(["176", "27.13"])]),
        seg("MOA", vec![Element::composite(["125", "142.80"])]),
        seg("MOA", vec![Element::composite(["86", "169.93"])]),
        seg("MOA", vec![Element::composite(["9", "169.93"])]),
        seg("MOA", vec![Element::composite(["129", "0.00"])]),
        seg("CNT", vec![Element::composite(["2", "1"])]),
    ])
}

#[test]
fn totals_are_taken_verbatim_from_summary_amounts() {
    let doc = invoic::assemble(&invoice_with_totals());

    assert_eq!(doc.totals.invoice_total, Some(169.93));
    assert_eq!(doc.totals.line_total, Some(142.80));
    assert_eq!(doc.totals.tax_total, Some(27.13));
    assert_eq!(doc.totals.taxable_amount, Some(142.80));
    assert_eq!(doc.totals.amount_due, Some(169.93));
    assert_eq!(doc.totals.allowance_charge_total, None);

    // Unmapped summary qualifiers stay in the generic list.
    assert_eq!(doc.amounts.len(), 1);
    assert_eq!(doc.amounts[0].qualifier, "129");
}

#[test]
fn invoice_total_stays_absent_when_never_supplied() {
    // No MOA 77/86: the document is malformed, and rejecting it is the
    // caller's decision; assembly itself does not heal or derive it.
    let doc = invoic::assemble(&message(vec![
        seg(
            "BGM",
            vec![Element::simple("380"), Element::simple("INV-9002")],
        ),
        seg("LIN", vec![Element::simple("1")]),
        seg("MOA", vec![Element::composite(["203", "10.00"])]),
    ]));

    assert_eq!(doc.document_number, "INV-9002");
    assert_eq!(doc.totals.invoice_total, None);
    // The line amount stayed on the line; nothing was rolled up.
    assert_eq!(doc.items[0].amounts[0].amount, 10.00);
    assert!(doc.amounts.is_empty());
}

#[test]
fn line_and_header_taxes_are_kept_apart() {
    let doc = invoic::assemble(&invoice_with_totals());

    assert_eq!(doc.taxes.len(), 1);
    assert_eq!(doc.taxes[0].rate, 19.0);
    assert_eq!(doc.taxes[0].category.as_deref(), Some("S"));

    assert_eq!(doc.items.len(), 1);
    assert_eq!(doc.items[0].taxes.len(), 1);
    assert_eq!(doc.items[0].taxes[0].tax_type.as_deref(), Some("VAT"));
}

#[test]
fn line_amounts_do_not_leak_into_totals() {
    let doc = invoic::assemble(&invoice_with_totals());

    assert_eq!(doc.items[0].amounts.len(), 1);
    assert_eq!(doc.items[0].amounts[0].qualifier, "203");
    assert_eq!(doc.currency.as_deref(), Some("EUR"));
    assert_eq!(doc.document_date, "2024-01-31");
    assert_eq!(doc.line_item_count, Some(1.0));
}

#[test]
fn assembly_is_deterministic() {
    let input = invoice_with_totals();
    assert_eq!(invoic::assemble(&input), invoic::assemble(&input));
}
