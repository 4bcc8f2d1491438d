//! Message container for one business document

use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// Header fields extracted from the message envelope by the tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Message reference number (UNH element 1).
    pub reference: String,

    /// Declared message type (e.g. `ORDERS`, `DESADV`).
    pub message_type: String,

    /// Message function code, when the envelope carried one.
    pub function: Option<String>,
}

/// One tokenized message: header plus the full ordered segment sequence for
/// a single business document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Envelope header.
    pub header: MessageHeader,

    /// Segments in arrival order. Hierarchy reconstruction depends on this
    /// order being the EDIFACT-standard order.
    pub segments: Vec<Segment>,
}

impl Message {
    /// Create a message for the given type and reference with no segments.
    pub fn new(message_type: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            header: MessageHeader {
                reference: reference.into(),
                message_type: message_type.into(),
                function: None,
            },
            segments: Vec::new(),
        }
    }

    /// Create a message from header and segments.
    pub fn with_segments(header: MessageHeader, segments: Vec<Segment>) -> Self {
        Self { header, segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Element;

    #[test]
    fn message_round_trips_through_json() {
        let message = Message::with_segments(
            MessageHeader {
                reference: "ME000001".to_string(),
                message_type: "ORDERS".to_string(),
                function: Some("9".to_string()),
            },
            vec![Segment::with_elements(
                "BGM",
                vec![Element::simple("220"), Element::simple("PO123")],
            )],
        );

        let json = serde_json::to_string(&message).expect("message should serialize");
        let back: Message = serde_json::from_str(&json).expect("message should deserialize");
        assert_eq!(back, message);
    }

    #[test]
    fn new_message_has_empty_segment_list() {
        let message = Message::new("DESADV", "REF-1");
        assert_eq!(message.header.message_type, "DESADV");
        assert_eq!(message.header.reference, "REF-1");
        assert!(message.segments.is_empty());
    }
}
