use serde::{Deserialize, Serialize};

use super::lossy_float;

/// The six metrics produced by an estimate.
///
/// Monetary fields are in the same currency unit as the input; `profit_margin`
/// is a percentage. Values are not rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Monthly gross salary paid to the owner.
    #[serde(with = "lossy_float")]
    pub gross_salary: f64,

    /// Monthly owner salary after tax.
    #[serde(with = "lossy_float")]
    pub net_owner_salary: f64,

    #[serde(with = "lossy_float")]
    pub yearly_profit: f64,

    #[serde(with = "lossy_float")]
    pub total_taxes: f64,

    #[serde(with = "lossy_float")]
    pub net_profit: f64,

    /// Older services spell this `profitMarging`.
    #[serde(with = "lossy_float", alias = "profitMarging")]
    pub profit_margin: f64,
}
