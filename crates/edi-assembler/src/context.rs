//! Open-context state helpers and lookahead grouping
//!
//! The hierarchy of a message is implicit: a segment type that opens a
//! level first flushes the still-open instance at that level into its
//! owning collection. [`flush_into`] is that transition, one call per
//! level, so each assembler's state record stays a handful of `Option`
//! slots.
//!
//! Two segment runs carry no back-reference to their anchor and need
//! lookahead instead: `CTA` followed by its `COM` run, and `ALC` followed
//! by its `PCD`/`MOA` run. Both are explicit cursor-advancing steps that
//! report the next unconsumed position, so the outer walk never re-reads a
//! consumed segment.

use crate::decode;
use edi_document::{AllowanceOrCharge, Contact};
use edi_message::Segment;

/// Flush the open instance of one hierarchy level into its owning
/// collection. No-op when the level has no open instance.
pub(crate) fn flush_into<T>(slot: &mut Option<T>, sink: &mut Vec<T>) {
    if let Some(value) = slot.take() {
        sink.push(value);
    }
}

/// Consume a `CTA` segment and its run of consecutive `COM` segments.
///
/// Returns the decoded contact and the index of the first segment past the
/// run.
pub fn collect_contact(segments: &[Segment], index: usize) -> (Contact, usize) {
    let mut contact = decode::contact(&segments[index]);
    let mut next = index + 1;
    while let Some(segment) = segments.get(next) {
        if segment.id != "COM" {
            break;
        }
        if let Some(communication) = decode::communication(segment) {
            contact.communications.push(communication);
        }
        next += 1;
    }
    (contact, next)
}

/// Consume an `ALC` segment and its run of consecutive `PCD`/`MOA`
/// segments.
///
/// Returns the decoded allowance/charge (or `None` when the indicator was
/// not `A`/`C`) and the index of the first segment past the run. The run is
/// consumed either way so a trailing `MOA` is never mis-dispatched as a
/// free-standing amount.
pub fn collect_allowance(
    segments: &[Segment],
    index: usize,
) -> (Option<AllowanceOrCharge>, usize) {
    let mut entry = decode::allowance_or_charge(&segments[index]);
    let mut next = index + 1;
    while let Some(segment) = segments.get(next) {
        match segment.id.as_str() {
            "PCD" => {
                if let Some(entry) = entry.as_mut() {
                    entry.percentage = Some(decode::numeric(segment.component(1, 2)));
                    if entry.basis.is_none() {
                        entry.basis = decode::numeric_opt(segment.component(1, 3));
                    }
                }
            }
            "MOA" => {
                if let Some(entry) = entry.as_mut() {
                    // MOA 25 is the allowance/charge basis amount; any other
                    // qualifier in the run is the applied amount.
                    if segment.component(1, 1) == Some("25") {
                        entry.basis = decode::numeric_opt(segment.component(1, 2));
                    } else {
                        entry.amount = decode::numeric_opt(segment.component(1, 2));
                    }
                }
            }
            _ => break,
        }
        next += 1;
    }
    (entry, next)
}
