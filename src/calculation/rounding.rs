//! Rounding and input validation shared by every calculator.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds a monetary value to two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::round2;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round2(dec!(99.995)), dec!(100.00));
/// assert_eq!(round2(dec!(1.004)), dec!(1.00));
/// assert_eq!(round2(dec!(-1.005)), dec!(-1.01));
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rejects negative amounts with [`EngineError::InvalidInput`].
///
/// `NaN` and infinities cannot be represented as a `Decimal`, so this only
/// checks the sign; non-finite floats are rejected by [`amount_from_f64`].
pub fn ensure_non_negative(value: Decimal, field: &str) -> EngineResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must be a non-negative finite number, got {}", value),
        ));
    }
    Ok(value)
}

/// Converts a binary float into a validated monetary amount.
///
/// Callers that hold `f64` values (parsed form input, spreadsheets) go
/// through here before calling a calculator. `NaN`, infinities, negative
/// numbers and values too large for `Decimal` are rejected.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::amount_from_f64;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_from_f64(150000.0, "gross_pay").unwrap(), dec!(150000));
/// assert!(amount_from_f64(f64::NAN, "gross_pay").is_err());
/// assert!(amount_from_f64(f64::INFINITY, "gross_pay").is_err());
/// assert!(amount_from_f64(-0.01, "gross_pay").is_err());
/// ```
pub fn amount_from_f64(value: f64, field: &str) -> EngineResult<Decimal> {
    if !value.is_finite() {
        return Err(EngineError::invalid_input(
            field,
            format!("must be a non-negative finite number, got {}", value),
        ));
    }
    let amount = Decimal::from_f64(value).ok_or_else(|| {
        EngineError::invalid_input(field, format!("{} is outside the supported range", value))
    })?;
    ensure_non_negative(amount, field)
}
