//! National Housing Trust contribution.

use rust_decimal::Decimal;

use crate::config::RateConfiguration;
use crate::error::EngineResult;
use crate::models::ContributionResult;

use super::rounding::{ensure_non_negative, round2};

/// Calculates NHT contributions on a **period** gross figure.
///
/// NHT has no ceiling, so the figure is used as supplied.
///
/// # Errors
///
/// Returns `InvalidInput` if `period_gross` is negative.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::calculate_nht;
/// use jamaica_payroll::config::RateConfiguration;
/// use rust_decimal_macros::dec;
///
/// let nht = calculate_nht(dec!(150000), &RateConfiguration::jamaica_2024()).unwrap();
/// assert_eq!(nht.employee, dec!(3000));
/// assert_eq!(nht.employer, dec!(4500));
/// ```
pub fn calculate_nht(
    period_gross: Decimal,
    config: &RateConfiguration,
) -> EngineResult<ContributionResult> {
    ensure_non_negative(period_gross, "period_gross")?;

    let employee = round2(period_gross * config.nht.employee_rate);
    let employer = round2(period_gross * config.nht.employer_rate);

    Ok(ContributionResult {
        employee,
        employer,
        total: round2(employee + employer),
    })
}
