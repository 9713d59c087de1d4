//! Payroll orchestration.
//!
//! This module combines the income tax engine and the four statutory
//! calculators into a single-period [`PayrollBreakdown`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CalculationBasis, PayPeriod, PayrollBreakdown};

use super::education_tax::calculate_education_tax;
use super::heart::calculate_heart;
use super::income_tax::calculate_income_tax;
use super::nht::calculate_nht;
use super::nis::calculate_nis;
use super::rounding::{ensure_non_negative, round2};

/// Calculates the full payroll breakdown for one pay period.
///
/// Income tax and NIS depend on yearly thresholds and ceilings, so they
/// are computed on the annualized gross and divided back down to the
/// period. NHT, Education Tax and HEART/NTA have no ceiling and are taken
/// directly from the period gross.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for one period
/// * `period` - The pay frequency `gross_pay` belongs to
/// * `config` - The rate table to apply
///
/// # Errors
///
/// Returns `InvalidInput` if `gross_pay` is negative. Validation happens
/// before any sub-calculation runs. `InvalidInput` is also returned when
/// the annualized gross or the employer's total cost would not fit in a
/// `Decimal`; no partial breakdown is produced in either case.
///
/// # Examples
///
/// ```
/// use jamaica_payroll::calculation::calculate_payroll;
/// use jamaica_payroll::config::RateConfiguration;
/// use jamaica_payroll::models::PayPeriod;
/// use rust_decimal_macros::dec;
///
/// let config = RateConfiguration::jamaica_2024();
/// let payroll = calculate_payroll(dec!(2400000), PayPeriod::Annual, &config).unwrap();
///
/// assert_eq!(payroll.gross_pay, dec!(2400000));
/// assert_eq!(payroll.annualized, dec!(2400000));
/// assert_eq!(
///     payroll.total_cost_to_employer,
///     payroll.gross_pay + payroll.total_employer_contributions
/// );
/// ```
pub fn calculate_payroll(
    gross_pay: Decimal,
    period: PayPeriod,
    config: &RateConfiguration,
) -> EngineResult<PayrollBreakdown> {
    ensure_non_negative(gross_pay, "gross_pay")?;

    let periods = period.periods_per_year_decimal();
    let annualized = round2(gross_pay.checked_mul(periods).ok_or_else(|| {
        EngineError::invalid_input(
            "gross_pay",
            format!(
                "{} x {} {} periods exceeds the supported range",
                gross_pay,
                period.periods_per_year(),
                period
            ),
        )
    })?);
    let mut audit = AuditRecorder::default();

    audit.record(
        "annualization",
        "Annualize Gross Pay",
        CalculationBasis::Period,
        serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "period": period.as_str(),
            "periods_per_year": period.periods_per_year()
        }),
        serde_json::json!({ "annualized": annualized.to_string() }),
        format!(
            "${} x {} {} periods = ${}",
            gross_pay,
            period.periods_per_year(),
            period,
            annualized
        ),
    );

    let income_tax_result = calculate_income_tax(annualized, config)?;
    let income_tax = round2(income_tax_result.tax / periods);
    audit.record(
        "income_tax",
        "PAYE Income Tax",
        CalculationBasis::Annualized,
        serde_json::json!({
            "annual_income": annualized.to_string(),
            "threshold": income_tax_result.threshold.to_string()
        }),
        serde_json::json!({
            "annual_tax": income_tax_result.tax.to_string(),
            "period_tax": income_tax.to_string(),
            "brackets_applied": income_tax_result.brackets.len()
        }),
        format!(
            "Taxable ${} above threshold ${}: annual tax ${} / {} = ${}",
            income_tax_result.taxable_income,
            income_tax_result.threshold,
            income_tax_result.tax,
            period.periods_per_year(),
            income_tax
        ),
    );

    let nis_result = calculate_nis(annualized, config)?;
    let nis = round2(nis_result.employee / periods);
    let employer_nis = round2(nis_result.employer / periods);
    audit.record(
        "nis",
        "National Insurance Scheme",
        CalculationBasis::Annualized,
        serde_json::json!({
            "annual_gross": annualized.to_string(),
            "annual_ceiling": config.nis.annual_ceiling.to_string()
        }),
        serde_json::json!({
            "employee": nis.to_string(),
            "employer": employer_nis.to_string(),
            "at_ceiling": nis_result.at_ceiling
        }),
        if nis_result.at_ceiling {
            format!(
                "Annual gross ${} capped at ceiling ${}",
                annualized, config.nis.annual_ceiling
            )
        } else {
            format!("Annual gross ${} below ceiling, no cap applied", annualized)
        },
    );

    let nht_result = calculate_nht(gross_pay, config)?;
    audit.record(
        "nht",
        "National Housing Trust",
        CalculationBasis::Period,
        serde_json::json!({ "period_gross": gross_pay.to_string() }),
        serde_json::json!({
            "employee": nht_result.employee.to_string(),
            "employer": nht_result.employer.to_string()
        }),
        format!(
            "${} x {} employee, x {} employer",
            gross_pay, config.nht.employee_rate, config.nht.employer_rate
        ),
    );

    let education_result = calculate_education_tax(gross_pay, config)?;
    audit.record(
        "education_tax",
        "Education Tax",
        CalculationBasis::Period,
        serde_json::json!({ "period_gross": gross_pay.to_string() }),
        serde_json::json!({
            "employee": education_result.employee.to_string(),
            "employer": education_result.employer.to_string()
        }),
        format!(
            "${} x {} employee, x {} employer",
            gross_pay, config.education_tax.employee_rate, config.education_tax.employer_rate
        ),
    );

    let employer_heart = calculate_heart(gross_pay, config)?;
    audit.record(
        "heart_nta",
        "HEART/NTA Levy",
        CalculationBasis::Period,
        serde_json::json!({ "period_gross": gross_pay.to_string() }),
        serde_json::json!({ "employer": employer_heart.to_string() }),
        format!(
            "${} x {} = ${} (employer only)",
            gross_pay, config.heart_nta.rate, employer_heart
        ),
    );

    let total_deductions =
        round2(income_tax + nis + nht_result.employee + education_result.employee);
    let net_pay = round2(gross_pay - total_deductions);
    audit.record(
        "employee_totals",
        "Employee Deductions",
        CalculationBasis::Period,
        serde_json::json!({ "gross_pay": gross_pay.to_string() }),
        serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "net_pay": net_pay.to_string()
        }),
        format!(
            "${} income tax + ${} NIS + ${} NHT + ${} education tax = ${}",
            income_tax, nis, nht_result.employee, education_result.employee, total_deductions
        ),
    );

    let total_employer_contributions = round2(
        employer_nis + nht_result.employer + education_result.employer + employer_heart,
    );
    let total_cost_to_employer = round2(
        gross_pay
            .checked_add(total_employer_contributions)
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "gross_pay",
                    format!(
                        "{} plus employer contributions exceeds the supported range",
                        gross_pay
                    ),
                )
            })?,
    );
    audit.record(
        "employer_totals",
        "Employer Contributions",
        CalculationBasis::Period,
        serde_json::json!({ "gross_pay": gross_pay.to_string() }),
        serde_json::json!({
            "total_employer_contributions": total_employer_contributions.to_string(),
            "total_cost_to_employer": total_cost_to_employer.to_string()
        }),
        format!(
            "${} NIS + ${} NHT + ${} education tax + ${} HEART/NTA = ${}",
            employer_nis,
            nht_result.employer,
            education_result.employer,
            employer_heart,
            total_employer_contributions
        ),
    );

    debug!(
        period = %period,
        annualized = %annualized,
        total_deductions = %total_deductions,
        net_pay = %net_pay,
        total_cost_to_employer = %total_cost_to_employer,
        "Payroll calculated"
    );

    Ok(PayrollBreakdown {
        period,
        gross_pay: round2(gross_pay),
        annualized,
        income_tax,
        nis,
        nht: nht_result.employee,
        education_tax: education_result.employee,
        total_deductions,
        net_pay,
        employer_nis,
        employer_nht: nht_result.employer,
        employer_education_tax: education_result.employer,
        employer_heart,
        total_employer_contributions,
        total_cost_to_employer,
        audit_trace: audit.into_steps(),
    })
}

/// Collects audit steps with sequential numbering.
#[derive(Default)]
struct AuditRecorder {
    steps: Vec<AuditStep>,
}

impl AuditRecorder {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        basis: CalculationBasis,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            basis,
            input,
            output,
            reasoning,
        });
    }

    fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}
