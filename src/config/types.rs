//! Rate configuration types.
//!
//! This module contains the strongly-typed rate table that every
//! calculation borrows. It is deserialized from YAML by
//! [`ConfigLoader`](super::ConfigLoader) or built in code by
//! [`RateConfiguration::jamaica_2024`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculation::round2;
use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriod;

/// Upper bound of a tax bracket.
///
/// Serialized as a plain number for `Bounded` and `null` for `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum BracketCeiling {
    /// The bracket ends (exclusive) at this amount.
    Bounded(Decimal),
    /// The top bracket, with no upper limit.
    Unbounded,
}

impl From<Option<Decimal>> for BracketCeiling {
    fn from(value: Option<Decimal>) -> Self {
        match value {
            Some(max) => BracketCeiling::Bounded(max),
            None => BracketCeiling::Unbounded,
        }
    }
}

impl From<BracketCeiling> for Option<Decimal> {
    fn from(value: BracketCeiling) -> Self {
        match value {
            BracketCeiling::Bounded(max) => Some(max),
            BracketCeiling::Unbounded => None,
        }
    }
}

/// A single income-tax bracket covering `[min, max)` of annual income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound.
    pub min: Decimal,
    /// Exclusive upper bound.
    pub max: BracketCeiling,
    /// Marginal rate applied inside the bracket.
    pub rate: Decimal,
    /// Display label.
    pub label: String,
}

impl TaxBracket {
    /// Width of the bracket, or `None` for the unbounded top bracket.
    pub fn width(&self) -> Option<Decimal> {
        match self.max {
            BracketCeiling::Bounded(max) => Some(max - self.min),
            BracketCeiling::Unbounded => None,
        }
    }
}

/// PAYE income tax parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxRates {
    /// Annual income below which no tax is charged.
    pub annual_threshold: Decimal,
    /// The bracket schedule, lowest first.
    pub brackets: Vec<TaxBracket>,
}

/// NIS rates and the annual insurable-earnings ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisRates {
    /// Employee share.
    pub employee_rate: Decimal,
    /// Employer share.
    pub employer_rate: Decimal,
    /// Annual gross above which contributions stop growing.
    pub annual_ceiling: Decimal,
}

/// Employee/employer rates for an uncapped contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Employee share.
    pub employee_rate: Decimal,
    /// Employer share.
    pub employer_rate: Decimal,
}

/// Employer-only levy rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevyRate {
    /// Employer rate.
    pub rate: Decimal,
}

/// The complete statutory rate table for one tax year.
///
/// Built once at start-up, validated, and then shared read-only. To move
/// to different rates, build a new value and swap the `Arc` holding it.
///
/// # Example
///
/// ```
/// use jamaica_payroll::config::RateConfiguration;
/// use jamaica_payroll::models::PayPeriod;
/// use rust_decimal_macros::dec;
///
/// let config = RateConfiguration::jamaica_2024();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.income_tax.annual_threshold, dec!(1500096));
/// assert_eq!(config.period_threshold(PayPeriod::Monthly), dec!(125008));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfiguration {
    /// The tax year these rates apply to.
    pub tax_year: u16,
    /// PAYE parameters.
    pub income_tax: IncomeTaxRates,
    /// National Insurance Scheme.
    pub nis: NisRates,
    /// National Housing Trust.
    pub nht: ContributionRates,
    /// Education Tax.
    pub education_tax: ContributionRates,
    /// HEART/NTA training levy.
    pub heart_nta: LevyRate,
}

impl RateConfiguration {
    /// The 2024 Jamaican rate table.
    pub fn jamaica_2024() -> Self {
        let threshold = dec!(1500096);
        let upper = threshold + dec!(6000000);

        Self {
            tax_year: 2024,
            income_tax: IncomeTaxRates {
                annual_threshold: threshold,
                brackets: vec![
                    TaxBracket {
                        min: Decimal::ZERO,
                        max: BracketCeiling::Bounded(threshold),
                        rate: Decimal::ZERO,
                        label: "0 - 1,500,096 (Threshold)".to_string(),
                    },
                    TaxBracket {
                        min: threshold,
                        max: BracketCeiling::Bounded(upper),
                        rate: dec!(0.25),
                        label: "1,500,097 - 7,500,096 (25%)".to_string(),
                    },
                    TaxBracket {
                        min: upper,
                        max: BracketCeiling::Unbounded,
                        rate: dec!(0.30),
                        label: "Above 7,500,096 (30%)".to_string(),
                    },
                ],
            },
            nis: NisRates {
                employee_rate: dec!(0.03),
                employer_rate: dec!(0.03),
                annual_ceiling: dec!(5000000),
            },
            nht: ContributionRates {
                employee_rate: dec!(0.02),
                employer_rate: dec!(0.03),
            },
            education_tax: ContributionRates {
                employee_rate: dec!(0.0225),
                employer_rate: dec!(0.035),
            },
            heart_nta: LevyRate { rate: dec!(0.03) },
        }
    }

    /// The income-tax threshold expressed per pay period.
    pub fn period_threshold(&self, period: PayPeriod) -> Decimal {
        round2(self.income_tax.annual_threshold / period.periods_per_year_decimal())
    }

    /// The NIS ceiling expressed per pay period.
    pub fn nis_period_ceiling(&self, period: PayPeriod) -> Decimal {
        round2(self.nis.annual_ceiling / period.periods_per_year_decimal())
    }

    /// Checks every invariant of the rate table.
    ///
    /// Rates must lie in `[0, 1]`, amounts must be non-negative, and the
    /// bracket schedule must start at zero, be contiguous and strictly
    /// increasing, end with the only unbounded bracket, and carry a zero
    /// rate below the threshold, which itself must sit on a bracket
    /// boundary.
    pub fn validate(&self) -> EngineResult<()> {
        check_rate("nis.employee_rate", self.nis.employee_rate)?;
        check_rate("nis.employer_rate", self.nis.employer_rate)?;
        check_rate("nht.employee_rate", self.nht.employee_rate)?;
        check_rate("nht.employer_rate", self.nht.employer_rate)?;
        check_rate("education_tax.employee_rate", self.education_tax.employee_rate)?;
        check_rate("education_tax.employer_rate", self.education_tax.employer_rate)?;
        check_rate("heart_nta.rate", self.heart_nta.rate)?;
        check_amount("nis.annual_ceiling", self.nis.annual_ceiling)?;
        check_amount(
            "income_tax.annual_threshold",
            self.income_tax.annual_threshold,
        )?;

        self.validate_brackets()
    }

    fn validate_brackets(&self) -> EngineResult<()> {
        let brackets = &self.income_tax.brackets;
        let threshold = self.income_tax.annual_threshold;

        let first = brackets
            .first()
            .ok_or_else(|| EngineError::invalid_config("bracket schedule is empty"))?;
        if !first.min.is_zero() {
            return Err(EngineError::invalid_config(format!(
                "first bracket must start at 0, starts at {}",
                first.min
            )));
        }

        for (index, bracket) in brackets.iter().enumerate() {
            check_rate(&format!("brackets[{}].rate", index), bracket.rate)?;
            let is_last = index + 1 == brackets.len();

            match bracket.max {
                BracketCeiling::Bounded(max) => {
                    if max <= bracket.min {
                        return Err(EngineError::invalid_config(format!(
                            "bracket '{}' has max {} not above min {}",
                            bracket.label, max, bracket.min
                        )));
                    }
                    if is_last {
                        return Err(EngineError::invalid_config(
                            "top bracket must be unbounded",
                        ));
                    }
                    let next = &brackets[index + 1];
                    if next.min != max {
                        return Err(EngineError::invalid_config(format!(
                            "gap or overlap between '{}' (max {}) and '{}' (min {})",
                            bracket.label, max, next.label, next.min
                        )));
                    }
                }
                BracketCeiling::Unbounded => {
                    if !is_last {
                        return Err(EngineError::invalid_config(format!(
                            "only the top bracket may be unbounded, '{}' is not last",
                            bracket.label
                        )));
                    }
                }
            }

            if bracket.min < threshold && !bracket.rate.is_zero() {
                return Err(EngineError::invalid_config(format!(
                    "bracket '{}' lies below the threshold {} but has rate {}",
                    bracket.label, threshold, bracket.rate
                )));
            }
        }

        if !brackets.iter().any(|b| b.min == threshold) {
            return Err(EngineError::invalid_config(format!(
                "threshold {} does not coincide with a bracket boundary",
                threshold
            )));
        }

        Ok(())
    }
}

impl Default for RateConfiguration {
    fn default() -> Self {
        Self::jamaica_2024()
    }
}

fn check_rate(name: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::invalid_config(format!(
            "{} must be within [0, 1], got {}",
            name, rate
        )));
    }
    Ok(())
}

fn check_amount(name: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::invalid_config(format!(
            "{} must be non-negative, got {}",
            name, amount
        )));
    }
    Ok(())
}
