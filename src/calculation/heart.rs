//! HEART/NTA training levy (employer only).

use rust_decimal::Decimal;

use crate::config::RateConfiguration;
use crate::error::EngineResult;

use super::rounding::{ensure_non_negative, round2};

/// Calculates the HEART/NTA levy on a **period** gross figure.
///
/// # Errors
///
/// Returns `InvalidInput` if `period_gross` is negative.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::calculate_heart;
/// use jamaica_payroll::config::RateConfiguration;
/// use rust_decimal_macros::dec;
///
/// let levy = calculate_heart(dec!(150000), &RateConfiguration::jamaica_2024()).unwrap();
/// assert_eq!(levy, dec!(4500));
/// ```
pub fn calculate_heart(period_gross: Decimal, config: &RateConfiguration) -> EngineResult<Decimal> {
    ensure_non_negative(period_gross, "period_gross")?;
    Ok(round2(period_gross * config.heart_nta.rate))
}
