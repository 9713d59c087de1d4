//! Audit trail records for payroll calculations.

use serde::{Deserialize, Serialize};

/// Whether a sub-calculation ran on the annualized figure or directly on
/// the period gross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationBasis {
    /// Evaluated against the annual equivalent, then de-annualized.
    Annualized,
    /// Evaluated against the period gross as supplied.
    Period,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application. Steps never influence the monetary results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The base the rule was evaluated against.
    pub basis: CalculationBasis,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
