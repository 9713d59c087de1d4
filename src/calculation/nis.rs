//! National Insurance Scheme contribution.
//!
//! NIS is charged on annual gross up to the insurable ceiling, split
//! between employee and employer.

use rust_decimal::Decimal;

use crate::config::RateConfiguration;
use crate::error::EngineResult;
use crate::models::NisContribution;

use super::rounding::{ensure_non_negative, round2};

/// Calculates NIS contributions on an **annual** gross figure.
///
/// Gross above `nis.annual_ceiling` is ignored; `at_ceiling` reports when
/// that cap was reached.
///
/// # Errors
///
/// Returns `InvalidInput` if `annual_gross` is negative.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::calculate_nis;
/// use jamaica_payroll::config::RateConfiguration;
/// use rust_decimal_macros::dec;
///
/// let config = RateConfiguration::jamaica_2024();
/// let nis = calculate_nis(dec!(6000000), &config).unwrap();
///
/// assert!(nis.at_ceiling);
/// assert_eq!(nis.employee, dec!(150000));
/// ```
pub fn calculate_nis(
    annual_gross: Decimal,
    config: &RateConfiguration,
) -> EngineResult<NisContribution> {
    ensure_non_negative(annual_gross, "annual_gross")?;

    let rates = &config.nis;
    let insurable = annual_gross.min(rates.annual_ceiling);
    let employee = round2(insurable * rates.employee_rate);
    let employer = round2(insurable * rates.employer_rate);

    Ok(NisContribution {
        employee,
        employer,
        total: round2(employee + employer),
        at_ceiling: annual_gross >= rates.annual_ceiling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn config() -> RateConfiguration {
        RateConfiguration::jamaica_2024()
    }

    /// NIS-001: income above the ceiling is capped
    #[test]
    fn test_income_above_ceiling_is_capped() {
        let result = calculate_nis(dec!(6000000), &config()).unwrap();

        assert!(result.at_ceiling);
        assert_eq!(result.employee, dec!(150000));
        assert_eq!(result.employer, dec!(150000));
        assert_eq!(result.total, dec!(300000));
    }

    /// NIS-002: income below the ceiling pays on the full amount
    #[test]
    fn test_income_below_ceiling_pays_full_rate() {
        let result = calculate_nis(dec!(1800000), &config()).unwrap();

        assert!(!result.at_ceiling);
        assert_eq!(result.employee, dec!(54000));
        assert_eq!(result.employer, dec!(54000));
    }

    /// NIS-003: income exactly at the ceiling counts as capped
    #[test]
    fn test_income_at_ceiling_is_flagged() {
        let result = calculate_nis(dec!(5000000), &config()).unwrap();

        assert!(result.at_ceiling);
        assert_eq!(result.employee, dec!(150000));
    }

    #[test]
    fn test_zero_income_gives_zero_contribution() {
        let result = calculate_nis(Decimal::ZERO, &config()).unwrap();

        assert_eq!(result.employee, dec!(0));
        assert_eq!(result.employer, dec!(0));
        assert_eq!(result.total, dec!(0));
        assert!(!result.at_ceiling);
    }

    #[test]
    fn test_negative_income_is_invalid_input() {
        assert!(matches!(
            calculate_nis(dec!(-0.01), &config()),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_employee_and_employer_rates_are_independent() {
        let mut config = config();
        config.nis.employer_rate = dec!(0.05);

        let result = calculate_nis(dec!(1000000), &config).unwrap();

        assert_eq!(result.employee, dec!(30000));
        assert_eq!(result.employer, dec!(50000));
        assert_eq!(result.total, dec!(80000));
    }

    proptest! {
        #[test]
        fn prop_contribution_is_flat_above_ceiling(extra in 0i64..=100_000_000_000) {
            let config = config();
            let ceiling = config.nis.annual_ceiling;
            let at_cap = calculate_nis(ceiling, &config).unwrap();

            let result = calculate_nis(ceiling + Decimal::new(extra, 2), &config).unwrap();

            prop_assert!(result.at_ceiling);
            prop_assert_eq!(result.employee, at_cap.employee);
            prop_assert_eq!(result.employer, at_cap.employer);
        }
    }
}
