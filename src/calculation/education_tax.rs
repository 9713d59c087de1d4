//! Education Tax.

use rust_decimal::Decimal;

use crate::config::RateConfiguration;
use crate::error::EngineResult;
use crate::models::ContributionResult;

use super::rounding::{ensure_non_negative, round2};

/// Calculates Education Tax on a **period** gross figure.
///
/// # Errors
///
/// Returns `InvalidInput` if `period_gross` is negative.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::calculate_education_tax;
/// use jamaica_payroll::config::RateConfiguration;
/// use rust_decimal_macros::dec;
///
/// let config = RateConfiguration::jamaica_2024();
/// let tax = calculate_education_tax(dec!(150000), &config).unwrap();
/// assert_eq!(tax.employee, dec!(3375));
/// assert_eq!(tax.employer, dec!(5250));
/// ```
pub fn calculate_education_tax(
    period_gross: Decimal,
    config: &RateConfiguration,
) -> EngineResult<ContributionResult> {
    ensure_non_negative(period_gross, "period_gross")?;

    let rates = &config.education_tax;
    let employee = round2(period_gross * rates.employee_rate);
    let employer = round2(period_gross * rates.employer_rate);

    Ok(ContributionResult {
        employee,
        employer,
        total: round2(employee + employer),
    })
}
