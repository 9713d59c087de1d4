//! Calculation logic for the payroll engine.
//!
//! This module contains the rounding utility, the PAYE bracket engine, the
//! four statutory contribution calculators (NIS, NHT, Education Tax and
//! HEART/NTA), and the payroll orchestrator that combines them. Every
//! function is pure and borrows the rate table it applies.

mod education_tax;
mod heart;
mod income_tax;
mod nht;
mod nis;
mod payroll;
mod rounding;

pub use education_tax::calculate_education_tax;
pub use heart::calculate_heart;
pub use income_tax::{calculate_income_tax, get_income_tax_brackets, get_tax_threshold};
pub use nht::calculate_nht;
pub use nis::calculate_nis;
pub use payroll::calculate_payroll;
pub use rounding::{amount_from_f64, ensure_non_negative, round2};
