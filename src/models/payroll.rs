//! Payroll breakdown model.
//!
//! This module contains the [`PayrollBreakdown`] type that captures every
//! output of a single-period payroll calculation: employee deductions, net
//! pay, employer contributions, and the audit trace that produced them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, PayPeriod};

/// Full payroll calculation for a single pay period.
///
/// All amounts are for the period in `period` except `annualized`.
/// `net_pay + total_deductions == gross_pay` and
/// `total_cost_to_employer == gross_pay + total_employer_contributions`.
///
/// # Example
///
/// ```
/// use jamaica_payroll::calculation::calculate_payroll;
/// use jamaica_payroll::config::RateConfiguration;
/// use jamaica_payroll::models::PayPeriod;
/// use rust_decimal_macros::dec;
///
/// let config = RateConfiguration::jamaica_2024();
/// let payroll = calculate_payroll(dec!(150000), PayPeriod::Monthly, &config).unwrap();
///
/// assert_eq!(payroll.annualized, dec!(1800000));
/// assert_eq!(payroll.net_pay + payroll.total_deductions, payroll.gross_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The pay period the figures apply to.
    pub period: PayPeriod,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Gross pay scaled up to a full year.
    pub annualized: Decimal,

    /// PAYE income tax withheld for the period.
    pub income_tax: Decimal,
    /// Employee NIS contribution for the period.
    pub nis: Decimal,
    /// Employee NHT contribution for the period.
    pub nht: Decimal,
    /// Employee Education Tax for the period.
    pub education_tax: Decimal,
    /// Sum of the four employee deductions.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions.
    pub net_pay: Decimal,

    /// Employer NIS contribution for the period.
    pub employer_nis: Decimal,
    /// Employer NHT contribution for the period.
    pub employer_nht: Decimal,
    /// Employer Education Tax for the period.
    pub employer_education_tax: Decimal,
    /// Employer HEART/NTA levy for the period.
    pub employer_heart: Decimal,
    /// Sum of the four employer contributions.
    pub total_employer_contributions: Decimal,
    /// Gross pay plus employer contributions.
    pub total_cost_to_employer: Decimal,

    /// Every rule applied, in order.
    pub audit_trace: Vec<AuditStep>,
}

impl PayrollBreakdown {
    /// Returns the audit step for a rule, if it was recorded.
    pub fn audit_step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.audit_trace.iter().find(|step| step.rule_id == rule_id)
    }
}
