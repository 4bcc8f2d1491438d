//! Message-type dispatcher
//!
//! The single point where an unrecognized message type is a hard error
//! rather than a silently-defaulted field.

use crate::{desadv, invoic, orders, ordrsp, Error, Result};
use edi_document::TypedDocument;
use edi_message::Message;
use tracing::debug;

/// Assemble the typed document matching the message's declared type.
///
/// Returns [`Error::UnsupportedMessageType`] for any type outside
/// ORDERS/ORDRSP/DESADV/INVOIC; no partial document is produced in that
/// case.
pub fn assemble_document(message: &Message) -> Result<TypedDocument> {
    debug!(
        message_type = %message.header.message_type,
        reference = %message.header.reference,
        "dispatching message"
    );

    match message.header.message_type.as_str() {
        "ORDERS" => Ok(TypedDocument::Orders(orders::assemble(message))),
        "ORDRSP" => Ok(TypedDocument::OrderResponse(ordrsp::assemble(message))),
        "DESADV" => Ok(TypedDocument::DespatchAdvice(desadv::assemble(message))),
        "INVOIC" => Ok(TypedDocument::Invoice(invoic::assemble(message))),
        other => Err(Error::UnsupportedMessageType {
            message_type: other.to_string(),
        }),
    }
}
