//! PAYE income tax bracket engine.
//!
//! This module applies the progressive bracket schedule from a
//! [`RateConfiguration`] to an annual income figure.

use rust_decimal::Decimal;

use crate::config::{RateConfiguration, TaxBracket};
use crate::error::EngineResult;
use crate::models::{BracketTax, IncomeTaxBreakdown};

use super::rounding::{ensure_non_negative, round2};

/// Returns the bracket schedule, lowest bracket first.
pub fn get_income_tax_brackets(config: &RateConfiguration) -> &[TaxBracket] {
    &config.income_tax.brackets
}

/// Returns the annual tax-free threshold.
pub fn get_tax_threshold(config: &RateConfiguration) -> Decimal {
    config.income_tax.annual_threshold
}

/// Calculates income tax on an annual income.
///
/// Taxable income is the part of `annual_income` above the threshold. It
/// is spread over the brackets that start at or above the threshold,
/// lowest first: each bounded bracket takes at most its width, and the
/// unbounded top bracket takes whatever remains. Each bracket's tax is
/// rounded to cents on its own and the total is the sum of those rounded
/// amounts, so the last cent can differ from rounding a single unrounded
/// sum.
///
/// # Errors
///
/// Returns `InvalidInput` if `annual_income` is negative. A `Decimal`
/// cannot hold `NaN` or an infinity, so non-finite values never reach
/// this function: they are rejected where floats are converted, in
/// [`amount_from_f64`](super::amount_from_f64).
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::calculate_income_tax;
/// use jamaica_payroll::config::RateConfiguration;
/// use rust_decimal_macros::dec;
///
/// let config = RateConfiguration::jamaica_2024();
///
/// let at_threshold = calculate_income_tax(dec!(1500096), &config).unwrap();
/// assert_eq!(at_threshold.tax, dec!(0));
///
/// let high = calculate_income_tax(dec!(10000000), &config).unwrap();
/// assert_eq!(high.brackets.len(), 2);
/// ```
pub fn calculate_income_tax(
    annual_income: Decimal,
    config: &RateConfiguration,
) -> EngineResult<IncomeTaxBreakdown> {
    ensure_non_negative(annual_income, "annual_income")?;

    let threshold = get_tax_threshold(config);
    let taxable_income = (annual_income - threshold).max(Decimal::ZERO);

    let mut remaining = taxable_income;
    let mut tax = Decimal::ZERO;
    let mut brackets = Vec::new();

    for bracket in get_income_tax_brackets(config)
        .iter()
        .filter(|b| b.min >= threshold)
    {
        if remaining <= Decimal::ZERO {
            break;
        }

        let in_bracket = bracket
            .width()
            .map_or(remaining, |width| remaining.min(width));
        let bracket_tax = round2(in_bracket * bracket.rate);

        brackets.push(BracketTax {
            bracket_label: bracket.label.clone(),
            taxable_amount_in_bracket: round2(in_bracket),
            tax_in_bracket: bracket_tax,
        });
        tax += bracket_tax;
        remaining -= in_bracket;
    }

    let tax = round2(tax);
    let effective_rate = if annual_income > Decimal::ZERO {
        round2(tax / annual_income)
    } else {
        Decimal::ZERO
    };

    Ok(IncomeTaxBreakdown {
        annual_income: round2(annual_income),
        threshold,
        taxable_income: round2(taxable_income),
        tax,
        effective_rate,
        brackets,
    })
}
