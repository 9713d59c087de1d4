//! Request types for the payroll API.
//!
//! Amounts arrive as JSON numbers or decimal strings and are deserialized
//! straight into `Decimal`. Periods arrive as strings and are parsed with
//! [`PayPeriod::from_str`] so an unknown identifier surfaces as
//! `InvalidInput` rather than a serde error.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::PayPeriod;

/// Request body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Gross pay for one period.
    pub gross_pay: Decimal,
    /// Pay frequency; defaults to monthly when omitted.
    #[serde(default)]
    pub period: Option<String>,
}

impl PayrollRequest {
    /// Resolves the requested period, falling back to the default.
    pub fn period(&self) -> EngineResult<PayPeriod> {
        match &self.period {
            Some(period) => PayPeriod::from_str(period),
            None => Ok(PayPeriod::default()),
        }
    }
}

/// Request body for `POST /income-tax`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxRequest {
    /// Annual income to tax.
    pub annual_income: Decimal,
}

/// Request body for `POST /contributions/nis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NisRequest {
    /// Annual gross to assess.
    pub annual_gross: Decimal,
}

/// Request body for the period-based contribution endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodGrossRequest {
    /// Gross pay for one period.
    pub period_gross: Decimal,
}
