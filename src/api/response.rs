//! Response types for the payroll API.
//!
//! This module defines the success envelopes and the error response
//! structures returned by the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{RateConfiguration, TaxBracket};
use crate::error::EngineError;
use crate::models::{PayPeriod, PayrollBreakdown};

/// The version of the engine reported in every payroll response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Envelope returned by `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The tax year of the rate table that was applied.
    pub tax_year: u16,
    /// The calculated breakdown.
    pub breakdown: PayrollBreakdown,
}

impl PayrollResponse {
    /// Wraps a breakdown with a fresh identifier and timestamp.
    pub fn new(breakdown: PayrollBreakdown, tax_year: u16) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            tax_year,
            breakdown,
        }
    }
}

/// Body of `GET /income-tax/brackets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketsResponse {
    /// The tax year of the schedule.
    pub tax_year: u16,
    /// The annual tax-free threshold.
    pub threshold: Decimal,
    /// The bracket schedule, lowest first.
    pub brackets: Vec<TaxBracket>,
}

/// Per-period view of the threshold and NIS ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodLimits {
    /// The pay period.
    pub period: PayPeriod,
    /// Income-tax threshold for one period.
    pub income_tax_threshold: Decimal,
    /// NIS ceiling for one period.
    pub nis_ceiling: Decimal,
}

/// Body of `GET /rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The active rate table.
    pub rates: RateConfiguration,
    /// Threshold and ceiling for each pay period.
    pub period_limits: Vec<PeriodLimits>,
}

impl RatesResponse {
    /// Builds the response from the active rate table.
    pub fn from_config(config: &RateConfiguration) -> Self {
        let period_limits = PayPeriod::ALL
            .iter()
            .map(|&period| PeriodLimits {
                period,
                income_tax_threshold: config.period_threshold(period),
                nis_ceiling: config.nis_period_ceiling(period),
            })
            .collect();

        Self {
            rates: config.clone(),
            period_limits,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input for '{}'", field),
                    message,
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid rate configuration",
                    message,
                ),
            },
        }
    }
}
