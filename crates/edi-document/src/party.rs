//! Party model with nested contacts and references

use crate::fields::Reference;
use serde::{Deserialize, Serialize};

/// Coded identification of a party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyIdentification {
    /// Party identifier (typically a GLN).
    pub id: String,

    /// Code list qualifier.
    pub code_list: Option<String>,

    /// Responsible agency code (`9` for EAN/GS1).
    pub agency: Option<String>,
}

/// A communication channel belonging to a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    /// Communication number (phone number, email address, …).
    pub number: String,

    /// Channel qualifier (`TE` telephone, `EM` email, …).
    pub channel: Option<String>,
}

/// A contact person or department within a party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact function code (`PD` purchasing, `DL` delivery, …).
    pub function: Option<String>,

    /// Contact name or department.
    pub name: Option<String>,

    /// Communication channels in arrival order.
    pub communications: Vec<Communication>,
}

/// A party to the business transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Party function qualifier (`BY` buyer, `SU` supplier, `DP` delivery
    /// party, …).
    pub qualifier: String,

    /// Coded identification, when supplied.
    pub identification: Option<PartyIdentification>,

    /// Party name.
    pub name: Option<String>,

    /// Street address.
    pub street: Option<String>,

    /// City name.
    pub city: Option<String>,

    /// Postal code.
    pub postal_code: Option<String>,

    /// Country code.
    pub country: Option<String>,

    /// Contacts attached to this party, in arrival order.
    pub contacts: Vec<Contact>,

    /// References scoped to this party, in arrival order.
    pub references: Vec<Reference>,
}

impl Party {
    /// Create a party with the given function qualifier.
    pub fn new(qualifier: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            ..Self::default()
        }
    }
}
