//! Statutory contribution result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee and employer shares of a flat-rate contribution (NHT, Education Tax).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionResult {
    /// Amount withheld from the employee.
    pub employee: Decimal,
    /// Amount paid by the employer on top of gross pay.
    pub employer: Decimal,
    /// `employee + employer`.
    pub total: Decimal,
}

impl ContributionResult {
    /// A contribution where every share is zero.
    pub const ZERO: ContributionResult = ContributionResult {
        employee: Decimal::ZERO,
        employer: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// NIS contribution, which also reports whether the annual ceiling capped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisContribution {
    /// Amount withheld from the employee.
    pub employee: Decimal,
    /// Amount paid by the employer.
    pub employer: Decimal,
    /// `employee + employer`.
    pub total: Decimal,
    /// True when annual gross reached the insurable ceiling.
    pub at_ceiling: bool,
}

