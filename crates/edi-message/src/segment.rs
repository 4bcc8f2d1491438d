//! Segment and element model with positional addressing
//!
//! Addressing is 1-based on both levels, matching EDIFACT directory
//! conventions. Out-of-range or empty positions are reported as `None`;
//! absence is the only signal at this layer.

use serde::{Deserialize, Serialize};

/// A data element within a segment.
///
/// Carries the raw value and, for composite elements, the ordered component
/// breakdown. The same logical field may arrive simple or composite
/// depending on which message variant produced it, so the raw value is kept
/// available either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Raw element value.
    pub value: String,

    /// Component breakdown, present when the element is composite.
    pub components: Option<Vec<String>>,
}

impl Element {
    /// Create a simple (non-composite) element.
    pub fn simple(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            components: None,
        }
    }

    /// Create a composite element from its components.
    ///
    /// The raw value is the components joined with `:`.
    pub fn composite<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        Self {
            value: components.join(":"),
            components: Some(components),
        }
    }
}

/// One tokenized segment: a tag plus its ordered data elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment tag (e.g. `NAD`, `LIN`, `DTM`).
    pub id: String,

    /// Data elements in arrival order (addressed 1-based).
    pub elements: Vec<Element>,
}

impl Segment {
    /// Create a segment with no elements.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
        }
    }

    /// Create a segment from its elements.
    pub fn with_elements(id: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            id: id.into(),
            elements,
        }
    }

    /// Raw value at a 1-based element position.
    ///
    /// Returns `None` when the position is out of range or the value is
    /// empty.
    pub fn element(&self, position: usize) -> Option<&str> {
        if position == 0 {
            return None;
        }
        self.elements
            .get(position - 1)
            .map(|element| element.value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Sub-value at a 1-based component position within an element.
    ///
    /// When the addressed element has no component breakdown and
    /// `component == 1`, falls back to the element's raw value: a simple
    /// element is treated as a single-component element.
    pub fn component(&self, element: usize, component: usize) -> Option<&str> {
        if element == 0 || component == 0 {
            return None;
        }
        let addressed = self.elements.get(element - 1)?;
        let value = match &addressed.components {
            Some(components) => components.get(component - 1).map(String::as_str),
            None if component == 1 => Some(addressed.value.as_str()),
            None => None,
        };
        value.filter(|v| !v.is_empty())
    }
}
