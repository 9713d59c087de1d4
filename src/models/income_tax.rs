//! Income tax result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax attributed to a single bracket of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    /// Label of the bracket this amount fell into (e.g. "1,500,097 - 7,500,096 (25%)").
    pub bracket_label: String,
    /// The portion of taxable income that fell into the bracket.
    pub taxable_amount_in_bracket: Decimal,
    /// Tax for the bracket, rounded on its own before summing.
    pub tax_in_bracket: Decimal,
}

/// Full breakdown of annual income tax (PAYE).
///
/// The sum of `tax_in_bracket` over `brackets` equals `tax`, and the sum of
/// `taxable_amount_in_bracket` equals `taxable_income`.
///
/// # Example
///
/// ```
/// use jamaica_payroll::calculation::calculate_income_tax;
/// use jamaica_payroll::config::RateConfiguration;
/// use rust_decimal_macros::dec;
///
/// let config = RateConfiguration::jamaica_2024();
/// let breakdown = calculate_income_tax(dec!(3000000), &config).unwrap();
///
/// assert_eq!(breakdown.taxable_income, dec!(1499904));
/// assert_eq!(breakdown.tax, dec!(374976.00));
/// assert_eq!(breakdown.brackets.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBreakdown {
    /// The annual income the tax was computed on.
    pub annual_income: Decimal,
    /// The tax-free threshold that was applied.
    pub threshold: Decimal,
    /// Income above the threshold, never negative.
    pub taxable_income: Decimal,
    /// Total annual tax.
    pub tax: Decimal,
    /// `tax / annual_income` rounded to 2 places, zero for zero income.
    pub effective_rate: Decimal,
    /// Per-bracket detail, lowest bracket first. Brackets that received no
    /// income are omitted.
    pub brackets: Vec<BracketTax>,
}

impl IncomeTaxBreakdown {
    /// Sum of the per-bracket taxes.
    pub fn bracket_tax_total(&self) -> Decimal {
        self.brackets.iter().map(|b| b.tax_in_bracket).sum()
    }

    /// Sum of the per-bracket taxable amounts.
    pub fn bracket_taxable_total(&self) -> Decimal {
        self.brackets.iter().map(|b| b.taxable_amount_in_bracket).sum()
    }
}
