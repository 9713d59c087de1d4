//! Core data models for the payroll engine.
//!
//! Every type here is a value object built fresh per calculation call.

mod audit;
mod contribution;
mod income_tax;
mod pay_period;
mod payroll;

pub use audit::{AuditStep, CalculationBasis};
pub use contribution::{ContributionResult, NisContribution};
pub use income_tax::{BracketTax, IncomeTaxBreakdown};
pub use pay_period::PayPeriod;
pub use payroll::PayrollBreakdown;
