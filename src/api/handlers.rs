//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_education_tax, calculate_heart, calculate_income_tax, calculate_nht, calculate_nis,
    calculate_payroll, get_income_tax_brackets, get_tax_threshold,
};
use crate::error::EngineError;

use super::request::{IncomeTaxRequest, NisRequest, PayrollRequest, PeriodGrossRequest};
use super::response::{
    ApiError, ApiErrorResponse, BracketsResponse, PayrollResponse, RatesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates", get(rates_handler))
        .route("/income-tax/brackets", get(brackets_handler))
        .route("/income-tax", post(income_tax_handler))
        .route("/contributions/nis", post(nis_handler))
        .route("/contributions/nht", post(nht_handler))
        .route("/contributions/education-tax", post(education_tax_handler))
        .route("/contributions/heart", post(heart_handler))
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Handler for GET /rates.
async fn rates_handler(State(state): State<AppState>) -> Response {
    json_ok(RatesResponse::from_config(state.config()))
}

/// Handler for GET /income-tax/brackets.
async fn brackets_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    json_ok(BracketsResponse {
        tax_year: config.tax_year,
        threshold: get_tax_threshold(config),
        brackets: get_income_tax_brackets(config).to_vec(),
    })
}

/// Handler for POST /income-tax.
async fn income_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncomeTaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        "income_tax",
        calculate_income_tax(request.annual_income, state.config()),
    )
}

/// Handler for POST /contributions/nis.
async fn nis_handler(
    State(state): State<AppState>,
    payload: Result<Json<NisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        "nis",
        calculate_nis(request.annual_gross, state.config()),
    )
}

/// Handler for POST /contributions/nht.
async fn nht_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodGrossRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        "nht",
        calculate_nht(request.period_gross, state.config()),
    )
}

/// Handler for POST /contributions/education-tax.
async fn education_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodGrossRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        "education_tax",
        calculate_education_tax(request.period_gross, state.config()),
    )
}

/// Handler for POST /contributions/heart.
///
/// The levy is a bare amount, so it is wrapped as `{"employer": ...}`.
async fn heart_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodGrossRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = calculate_heart(request.period_gross, state.config())
        .map(|levy| serde_json::json!({ "employer": levy }));
    respond(correlation_id, "heart_nta", result)
}

/// Handler for POST /payroll.
///
/// Accepts a gross pay figure and optional period and returns the full
/// breakdown wrapped in a [`PayrollResponse`].
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let config = state.config();
    let start_time = Instant::now();
    let result = request
        .period()
        .and_then(|period| calculate_payroll(request.gross_pay, period, config));

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                period = %breakdown.period,
                gross_pay = %breakdown.gross_pay,
                net_pay = %breakdown.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculation completed successfully"
            );
            json_ok(PayrollResponse::new(breakdown, config.tax_year))
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Unwraps a JSON payload or builds the 400 response for it.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Turns a calculator result into a JSON response, logging the outcome.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    rule: &str,
    result: Result<T, EngineError>,
) -> Response {
    match result {
        Ok(body) => {
            info!(correlation_id = %correlation_id, rule, "Calculation completed");
            json_ok(body)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
