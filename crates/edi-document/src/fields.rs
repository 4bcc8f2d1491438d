//! Substructures shared across all message types

use serde::{Deserialize, Serialize};

/// A qualified date or date/time value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    /// Date/time qualifier (e.g. `137` document date, `132` delivery date).
    pub qualifier: String,

    /// Date value. Calendar dates with format qualifier `102` are rewritten
    /// to `YYYY-MM-DD`; every other format is carried unchanged.
    pub value: String,

    /// Format qualifier as received.
    pub format: Option<String>,
}

/// A qualified reference number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Reference qualifier (e.g. `ON` order number, `DQ` delivery note).
    pub qualifier: String,

    /// Reference number.
    pub number: Option<String>,

    /// Line sub-number within the referenced document.
    pub line_number: Option<String>,

    /// Document sub-number of the referenced document.
    pub document_number: Option<String>,
}

/// A qualified monetary amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    /// Amount type qualifier (e.g. `203` line amount).
    pub qualifier: String,

    /// Amount value; `0.0` when the source text did not parse.
    pub amount: f64,

    /// Currency code, when supplied with the amount.
    pub currency: Option<String>,
}

/// A qualified quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Quantity qualifier (e.g. `21` ordered, `12` despatched).
    pub qualifier: String,

    /// Quantity value; `0.0` when the source text did not parse.
    pub value: f64,

    /// Measure unit qualifier.
    pub unit: Option<String>,
}

/// A qualified price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Price qualifier (e.g. `AAA` net, `AAB` gross).
    pub qualifier: String,

    /// Price amount; `0.0` when the source text did not parse.
    pub amount: f64,

    /// Price type code.
    pub price_type: Option<String>,

    /// Unit price basis quantity.
    pub basis: Option<f64>,

    /// Measure unit qualifier for the basis.
    pub unit: Option<String>,
}

/// A duty/tax/fee detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    /// Duty/tax function qualifier (`7` for tax).
    pub function: String,

    /// Tax type code (e.g. `VAT`).
    pub tax_type: Option<String>,

    /// Tax rate percentage; `0.0` when the source text did not parse.
    pub rate: f64,

    /// Tax category code.
    pub category: Option<String>,
}

/// Whether an allowance/charge entry reduces or increases the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllowanceChargeIndicator {
    /// `A` — allowance.
    Allowance,
    /// `C` — charge.
    Charge,
}

/// An allowance or charge with its percentage/amount/basis details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceOrCharge {
    /// Allowance or charge indicator.
    pub indicator: AllowanceChargeIndicator,

    /// Special service code identifying the allowance/charge.
    pub service_code: Option<String>,

    /// Percentage applied.
    pub percentage: Option<f64>,

    /// Monetary amount applied.
    pub amount: Option<f64>,

    /// Basis the percentage or amount applies to.
    pub basis: Option<f64>,
}

/// A product identifier with its numbering scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdentifier {
    /// Item number.
    pub number: String,

    /// Item number type (e.g. `EN` EAN, `SA` supplier article number).
    pub id_type: Option<String>,

    /// Responsible agency code.
    pub agency: Option<String>,
}

/// A measured dimension (weight, length, …).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Measured dimension code (e.g. `WT` weight, `HT` height).
    pub dimension: String,

    /// Measured value; `0.0` when the source text did not parse.
    pub value: f64,

    /// Measure unit qualifier.
    pub unit: Option<String>,
}
