//! Pay period model.
//!
//! A [`PayPeriod`] identifies how often an employee is paid and therefore
//! how a period gross figure is annualized for bracket and ceiling checks.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The frequency at which gross pay is earned.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::models::PayPeriod;
///
/// let period: PayPeriod = "fortnightly".parse().unwrap();
/// assert_eq!(period, PayPeriod::Fortnightly);
/// assert_eq!(period.periods_per_year(), 26);
/// assert_eq!(PayPeriod::default(), PayPeriod::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    /// Paid every week (52 periods per year).
    Weekly,
    /// Paid every two weeks (26 periods per year).
    Fortnightly,
    /// Paid every month (12 periods per year).
    #[default]
    Monthly,
    /// Paid once per year.
    Annual,
}

impl PayPeriod {
    /// All supported periods, shortest first.
    pub const ALL: [PayPeriod; 4] = [
        PayPeriod::Weekly,
        PayPeriod::Fortnightly,
        PayPeriod::Monthly,
        PayPeriod::Annual,
    ];

    /// Returns the number of pay periods in a year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            PayPeriod::Weekly => 52,
            PayPeriod::Fortnightly => 26,
            PayPeriod::Monthly => 12,
            PayPeriod::Annual => 1,
        }
    }

    /// Returns [`periods_per_year`](Self::periods_per_year) as a `Decimal`
    /// multiplier/divisor.
    pub fn periods_per_year_decimal(self) -> Decimal {
        Decimal::from(self.periods_per_year())
    }

    /// Returns the lowercase identifier used in requests and YAML.
    pub fn as_str(self) -> &'static str {
        match self {
            PayPeriod::Weekly => "weekly",
            PayPeriod::Fortnightly => "fortnightly",
            PayPeriod::Monthly => "monthly",
            PayPeriod::Annual => "annual",
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(PayPeriod::Weekly),
            "fortnightly" => Ok(PayPeriod::Fortnightly),
            "monthly" => Ok(PayPeriod::Monthly),
            "annual" => Ok(PayPeriod::Annual),
            _ => Err(EngineError::invalid_input(
                "period",
                format!(
                    "unrecognized pay period '{}' (expected weekly, fortnightly, monthly or annual)",
                    s
                ),
            )),
        }
    }
}
